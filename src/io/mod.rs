//! I/O layer: filesystem listing and directory resolution, the book
//! catalog reader, the console port, and the external tagging tool driver.
pub mod catalog;
pub use catalog::{BookEntry, Catalog, CatalogError};

pub mod console;
pub use console::{Console, ConsoleError};

pub mod fs;
pub use fs::{Listing, list_archives, list_dirs, list_dirs_and_files, resolve_directory};

pub mod tagger;
pub use tagger::{Invocation, ProcessRunner, RunStatus, SystemRunner, Tagger, TaggerError};
