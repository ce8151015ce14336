//! Entry construction errors

use thiserror::Error;

/// Errors that can occur while building an entry
///
/// These are caller contract violations. They are reported at construction
/// time so that an invalid entry never reaches verification or dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Motion entry has no pointers")]
    NoPointers,

    #[error("Pointer count mismatch: {properties} properties, {coords} coords")]
    PointerCountMismatch { properties: usize, coords: usize },

    #[error("Too many pointers: {0} (max {max})", max = crate::input::MAX_POINTERS)]
    TooManyPointers(usize),

    #[error("Invalid pointer id: {0}")]
    InvalidPointerId(i32),

    #[error("Duplicate pointer id: {0}")]
    DuplicatePointerId(i32),
}

/// Result type for entry construction
pub type EntryResult<T> = Result<T, EntryError>;
