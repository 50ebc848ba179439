//! High-level library API: the chooser and metadata prompts, interactive
//! batch tagging of a directory, and catalog-driven directory tagging.
//! All workflows take their console and process runner as parameters, so
//! they run the same against a terminal or a scripted test double.
use tracing::info;

pub mod batch;
pub mod prompt;

pub use batch::{
    DEFAULT_CATALOG, process_catalog_directory, process_directory, run_catalog_session,
    run_session,
};
pub use prompt::{Selection, choose_entry, prompt_metadata};

/// Outcome counters for one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl BatchReport {
    pub fn log_summary(&self) {
        info!("Batch complete!");
        info!("Processed: {}", self.processed);
        info!("Skipped: {}", self.skipped);
        info!("Errors: {}", self.errors);
    }
}
