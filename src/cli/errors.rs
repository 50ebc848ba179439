use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: cbztag::Error,
    },

    #[error("Cannot determine the current directory: {0}")]
    CurrentDir(std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[from] rustyline::error::ReadlineError),

    #[error(transparent)]
    Tagging(#[from] cbztag::Error),
}
