//! I/O module
//!
//! Persistence gateway between the in-memory collections and the data
//! directory.
//!
//! # Components
//!
//! - `delimited` - Pipe-delimited record format (pure, no filesystem access)
//! - `store` - Loading and saving the three data files

pub mod delimited;
pub mod store;

pub use delimited::{read_records, write_records, DelimitedRecord};
pub use store::{load_state, save_state, DataFiles};
