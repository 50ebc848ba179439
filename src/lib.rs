#![doc = r#"
cbztag: hand-entered metadata for comic archives, written by `comictagger`.

This crate walks a directory of `.cbz` archives, asks for a date, title and
comments per archive, cleans and encodes the answers into comictagger's
`key=value,key=value` payload, and runs the tool once per archive. A second
mode tags a whole book directory from a JSON catalog (`manga.json`).

Stability
---------
The library API follows the CLI and may change between minor releases.

Requirements
------------
- `comictagger` on `PATH` (or configured via `TaggerConfig::tool`).
- Rust 2024 edition toolchain.

Encode a record
---------------
```rust
use cbztag::{encode, extract_volume, Field, MetadataRecord};

let title = "Hero, Vol. 5";
let mut record = MetadataRecord::new();
record.insert(Field::Year, "2021");
record.insert(Field::Title, title);
if let Some(volume) = extract_volume(title) {
    record.insert(Field::Volume, volume);
}
assert_eq!(encode(&record), "year=2021,title=Hero^, Vol. 5,volume=5");
```

Write tags with the system tool
-------------------------------
```rust,no_run
use std::path::Path;
use cbztag::{Field, MetadataRecord, SystemRunner, Tagger, TaggerConfig};

fn main() -> cbztag::Result<()> {
    let mut tagger = Tagger::new(TaggerConfig::default(), SystemRunner);
    let mut record = MetadataRecord::new();
    record.insert(Field::Title, "Saga, Vol. 1");
    tagger.write_tags(&record, Path::new("/comics/Saga v01.cbz"))?;
    tagger.print_tags(Path::new("/comics/Saga v01.cbz"))?;
    Ok(())
}
```

Error handling
--------------
All public workflows return `cbztag::Result<T>`; match on `cbztag::Error` for
specific cases such as a missing directory or a user interrupt.

Useful modules
--------------
- [`api`]: chooser, prompts, and batch workflows.
- [`core`](crate::core): volume extraction, cleaning, record, encoder, config.
- [`io`]: filesystem, catalog, console port, and tagger driver.
- [`types`]: field vocabulary and shared enums.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::metadata::{Credit, MetadataRecord, Value};
pub use crate::core::params::{PermissionFix, TaggerConfig};
pub use error::{Error, Result};
pub use types::{DatePart, Field, Tone};

// Pure transforms
pub use crate::core::clean::clean;
pub use crate::core::encode::encode;
pub use crate::core::volume::{VolumeRank, extract_volume, sort_by_volume};

// Ports
pub use io::{
    Catalog, Console, ConsoleError, Invocation, ProcessRunner, RunStatus, SystemRunner, Tagger,
    TaggerError,
};

// High-level API re-exports
pub use api::{
    BatchReport, Selection, choose_entry, process_catalog_directory, process_directory,
    prompt_metadata, run_catalog_session, run_session,
};
