//! Shutdown persistence.
//!
//! When the palette closes (or the host is about to quit) it overwrites a
//! marker file with a fixed line of text. The write is best effort: callers
//! log failures and carry on.

mod options;
mod storage;

pub use options::{SessionOptions, expand_tilde};
pub use storage::{MARKER_TEXT, PersistError, read_marker, write_marker};
