//! The interactive prompt.
//!
//! Reads one line at a time and scans it exactly like file input. The
//! prompt never terminates on malformed input; diagnostics are printed
//! and the next line is read.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub fn run(pretty: bool) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let use_color = pretty && crate::atty_is_terminal();

    println!("loxscript {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or press Ctrl-D to leave");

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "exit" {
                    break;
                }
                if trimmed == "cls" {
                    // ANSI clear screen, cursor to home
                    print!("\x1b[2J\x1b[H");
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                crate::run(trimmed, use_color);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
