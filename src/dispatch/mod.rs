//! Per-connection dispatch entries
//!
//! A `DispatchEntry` wraps a shared `EventEntry` for one delivery target and
//! carries the sequence number used to match the target's acknowledgement.

pub mod entry;
pub mod sequence;
pub mod state;

pub use entry::{DispatchEntry, DispatchTarget};
pub use sequence::{Seq, SequenceAllocator};
pub use state::{EntryDispatchState, EntryStateTable, InterceptKeyResult, KeyRepeatState};
