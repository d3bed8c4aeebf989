use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use pg_engine::{GeneratorConfig, Reply, Session, render};

pub fn run(config: &GeneratorConfig, start: &str) -> Result<(), String> {
    let registry = super::load_registry()?;
    let mut session = Session::new(&registry, config, start).map_err(|e| super::describe(&e))?;
    let mut editor = DefaultEditor::new().map_err(|e| e.to_string())?;

    loop {
        let prompt = format!("Enter a table name (default: {}): ", session.previous());
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Quitting");
                return Ok(());
            }
            Err(e) => return Err(e.to_string()),
        };
        if !line.trim().is_empty() {
            editor
                .add_history_entry(line.as_str())
                .map_err(|e| e.to_string())?;
        }

        match session.process(&line) {
            Ok(Reply::Names(names)) => println!("{}", names.join(", ")),
            Ok(Reply::Story(story)) => print!("{}", render(&story)),
            Ok(Reply::NotFound(name)) => println!("{name}: not found"),
            // Recursion guards and bad entries end this roll, not the session.
            Err(e) => println!("{}", super::describe(&e).yellow()),
        }
    }
}
