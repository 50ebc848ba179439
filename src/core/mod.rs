//! Core building blocks: volume extraction, value cleaning, the ordered
//! metadata record, payload encoding, and tagging parameters. These are
//! pure primitives consumed by the high-level `api` module.
pub mod clean;
pub mod encode;
pub mod metadata;
pub mod params;
pub mod volume;
