//! Delivery sequence numbers
//!
//! Every dispatch entry gets a sequence number that the receiving connection
//! echoes back when it acknowledges delivery. Zero is reserved on the wire as
//! "no sequence" and is never handed out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};

/// Non-zero delivery sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seq(NonZeroU32);

impl Seq {
    /// Interpret a sequence number read off the wire. Returns `None` for 0.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Seq)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Seq> for u32 {
    fn from(seq: Seq) -> Self {
        seq.get()
    }
}

/// Lock-free source of unique, non-zero sequence numbers
///
/// One allocator is shared (by reference or `Arc`) by everything that creates
/// dispatch entries in a process. Values are unique until the 32-bit space
/// wraps; after that, uniqueness only holds among entries that are in flight
/// at the same time, which the caller must bound. No ordering across threads
/// is promised.
#[derive(Debug, Default)]
pub struct SequenceAllocator {
    last: AtomicU32,
}

impl SequenceAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator whose first value will be `last + 1` (skipping 0)
    pub fn starting_after(last: u32) -> Self {
        Self {
            last: AtomicU32::new(last),
        }
    }

    pub fn next_sequence(&self) -> Seq {
        loop {
            let seq = self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
            if let Some(seq) = Seq::new(seq) {
                return seq;
            }
            tracing::debug!("Sequence counter wrapped, skipping reserved value 0");
        }
    }
}
