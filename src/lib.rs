//! Input Entries - event records for an input dispatch pipeline.
//!
//! Holds the immutable entries an input dispatcher queues (key, motion,
//! sensor and the notification kinds), derives signature-ready verified
//! events from them, and wraps them per delivery target in dispatch entries
//! numbered by a lock-free sequence allocator.

pub mod config;
pub mod dispatch;
pub mod entry;
pub mod error;
pub mod input;
pub mod verified;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::EntryConfig;
pub use dispatch::{DispatchEntry, DispatchTarget, EntryStateTable, Seq, SequenceAllocator};
pub use entry::{DescriptionMode, EntryPayload, EventEntry, EventType, InjectionState};
pub use error::{EntryError, EntryResult};
pub use verified::{verified_event, VerifiedEvent};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured filter. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_logging(config: &EntryConfig) {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
