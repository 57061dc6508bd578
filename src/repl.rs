use std::process::ExitCode;

use rustyline::{DefaultEditor, error::ReadlineError};
use seqfn::interpreter::{
    console::StdConsole,
    session::{Outcome, Session},
};

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = ". ";
const LIST_COMMAND: &str = ":defs";

/// The interactive loop over a standard-stream session.
pub struct Repl {
    editor:  DefaultEditor,
    session: Session<StdConsole>,
}

impl Repl {
    pub fn new(session: Session<StdConsole>) -> rustyline::Result<Self> {
        Ok(Self { editor: DefaultEditor::new()?,
                  session })
    }

    /// Reads lines until `exit`, end of input or an editor failure.
    pub fn run(&mut self) -> ExitCode {
        loop {
            let prompt = if self.session.is_pending() {
                CONTINUATION_PROMPT
            } else {
                PROMPT
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty()
                       && let Err(e) = self.editor.add_history_entry(line.as_str())
                    {
                        tracing::debug!(error = %e, "history entry not recorded");
                    }
                    if !self.session.is_pending() && line.trim() == LIST_COMMAND {
                        self.list_definitions();
                        continue;
                    }
                    if self.handle_line(&line) {
                        break;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                },
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                },
            }
        }

        println!("> Goodbye!");
        ExitCode::SUCCESS
    }

    /// Returns `true` when the session should end.
    fn handle_line(&mut self, line: &str) -> bool {
        match self.session.feed_line(line) {
            Ok(Outcome::Exit) => return true,
            Ok(Outcome::Value(value)) => println!("> {value}"),
            Ok(Outcome::Defined { is_new, .. }) => println!("> {}", u8::from(!is_new)),
            Ok(Outcome::Skipped | Outcome::Pending) => {},
            Err(e) => eprintln!("{e}"),
        }

        false
    }

    fn list_definitions(&self) {
        let registry = self.session.registry();

        for name in registry.names() {
            if let Ok(definition) = registry.lookup(name) {
                println!("{name}/{} -> {}", definition.arity(), definition.body());
            }
        }
    }
}
