//! Command Line Interface (CLI) layer for cbztag.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! the rustyline/yansi backed terminal console (`terminal`), and the
//! orchestration logic (`runner`) that wires them to the library
//! workflows exposed via `cbztag::api`.
pub mod args;
pub mod errors;
pub mod runner;
pub mod terminal;

pub use args::CliArgs;
pub use runner::run;
