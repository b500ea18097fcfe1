use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

use pythia::validate;

fn main() -> ReplResult<()> {
    run_repl()
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    println!("Enter your Python-like code (or 'exit' to quit):");
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = rl.add_history_entry(line.as_str());
                match validate(&line) {
                    Ok(()) => println!("Parsed successfully!"),
                    Err(e) => println!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Parsing Error: {err}");
                break;
            }
        }
    }
    Ok(())
}
