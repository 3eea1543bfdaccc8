//! Error types for the deskentry crate.
//!
//! Only an unreadable source file is a hard error. Malformed lines are
//! skipped during parsing and accessor misses are plain `None`s.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
