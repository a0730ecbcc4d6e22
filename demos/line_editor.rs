// demos/line_editor.rs
//! Walks through the buffer the way a small line editor would use it

use gapbuf::prelude::*;
use std::io::{BufRead, Seek, SeekFrom, Write};

fn main() -> Result<()> {
    println!("=== Appending Text ===\n");

    let mut buf = Buffer::new();
    buf.reserve(128);

    for line in ["first line", "second line", "third line"] {
        writeln!(buf, "{}", line)?;
        println!(
            "Appended {:?} (pos: {}, len: {}, cap: {})",
            line,
            buf.position(),
            buf.len(),
            buf.capacity()
        );
    }

    println!("\n=== Cursor Movement ===\n");

    println!("move_to(0)   -> delta {}", buf.move_to(0));
    println!("move_by(-1)  -> delta {} (clamped)", buf.move_by(-1));
    println!("move_by(6)   -> delta {}", buf.move_by(6));
    println!(
        "move_to(len+1) -> delta {} (clamped)",
        buf.move_to(buf.len() as isize + 1)
    );

    match buf.try_move_to(-3) {
        Ok(pos) => println!("Unexpectedly moved to {}", pos),
        Err(e) => println!("try_move_to(-3) failed: {}", e),
    }

    println!("\n=== Chunked Reads ===\n");

    buf.move_to(0);
    let mut chunk = [0u8; 8];
    loop {
        let outcome = buf.read(&mut chunk);
        println!(
            "{:?}: {:?}",
            outcome,
            String::from_utf8_lossy(&chunk[..outcome.count()])
        );
        if outcome.is_end() {
            break;
        }
    }

    println!("\n=== Line Iteration via std::io ===\n");

    buf.seek(SeekFrom::Start(0))?;
    let mut line = String::new();
    let mut number = 1;
    while buf.read_line(&mut line)? > 0 {
        print!("{:>3} | {}", number, line);
        line.clear();
        number += 1;
    }

    println!("\n=== Secure Erasure ===\n");

    println!("Before burn: {:?}", buf);
    buf.burn();
    println!("After burn:  {:?}", buf);

    Ok(())
}
