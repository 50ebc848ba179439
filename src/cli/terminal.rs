//! Terminal implementation of the console port: rustyline for input
//! (Ctrl-C and Ctrl-D surface as errors instead of killing the process),
//! yansi for colour.
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use yansi::Paint;

use cbztag::{Console, ConsoleError, Tone};

pub struct TerminalConsole {
    editor: DefaultEditor,
}

impl TerminalConsole {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        match self.editor.readline(message) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Interrupted) => Err(ConsoleError::Interrupted),
            Err(ReadlineError::Eof) => Err(ConsoleError::Closed),
            Err(ReadlineError::Io(e)) => Err(ConsoleError::Io(e)),
            Err(other) => Err(ConsoleError::Io(std::io::Error::other(other.to_string()))),
        }
    }

    fn line(&mut self, tone: Tone, text: &str) {
        match tone {
            Tone::Heading => println!("{}", text.yellow()),
            Tone::Directory => println!("{}", text.green()),
            Tone::File => println!("{}", text.blue()),
            Tone::Notice => println!("{}", text.red()),
            Tone::Plain => println!("{}", text),
        }
    }

    fn menu_entry(&mut self, number: usize, label: &str, tone: Tone) {
        let label = match tone {
            Tone::Directory => label.green(),
            Tone::File => label.blue(),
            _ => label.primary(),
        };
        println!("{}. {}", number.red(), label);
    }
}
