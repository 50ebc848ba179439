//! Console port used by the interactive workflows.
//!
//! The binary plugs in a line-editor backed terminal; tests plug in a
//! scripted implementation. Nothing in the library talks to stdin directly.
use thiserror::Error;

use crate::types::Tone;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("interrupted")]
    Interrupted,
    #[error("input closed")]
    Closed,
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Console {
    /// Show `message` and read one line of input, without the line ending.
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError>;

    /// Print one line of output.
    fn line(&mut self, tone: Tone, text: &str);

    /// Print one numbered chooser entry.
    fn menu_entry(&mut self, number: usize, label: &str, tone: Tone) {
        self.line(tone, &format!("{}. {}", number, label));
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        (**self).prompt(message)
    }

    fn line(&mut self, tone: Tone, text: &str) {
        (**self).line(tone, text)
    }

    fn menu_entry(&mut self, number: usize, label: &str, tone: Tone) {
        (**self).menu_entry(number, label, tone)
    }
}
