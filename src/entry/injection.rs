//! Bookkeeping for programmatically injected events
//!
//! An `InjectionState` is shared (`Arc`) between the injecting caller and every
//! entry produced for the injection. The caller waits on the result while the
//! dispatcher counts outstanding foreground deliveries.

use crate::input::Uid;
use parking_lot::Mutex as ParkingMutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Outcome of an injection as reported back to the injector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InjectionResult {
    #[default]
    Pending,
    Succeeded,
    Failed,
    PermissionDenied,
    TimedOut,
}

#[derive(Debug)]
pub struct InjectionState {
    /// Uid of the injector, if it is not the system itself
    pub injector_uid: Option<Uid>,
    /// The injector does not wait for the result
    pub is_async: bool,
    result: ParkingMutex<InjectionResult>,
    pending_foreground_dispatches: AtomicU32,
}

impl InjectionState {
    pub fn new(injector_uid: Option<Uid>, is_async: bool) -> Self {
        Self {
            injector_uid,
            is_async,
            result: ParkingMutex::new(InjectionResult::Pending),
            pending_foreground_dispatches: AtomicU32::new(0),
        }
    }

    pub fn result(&self) -> InjectionResult {
        *self.result.lock()
    }

    /// Record the final outcome of the injection
    ///
    /// Only the first non-pending result is kept. Returns whether this call
    /// changed the result.
    pub fn set_result(&self, result: InjectionResult) -> bool {
        if result == InjectionResult::Pending {
            return false;
        }

        let mut current = self.result.lock();
        if *current != InjectionResult::Pending {
            tracing::warn!(
                "Ignoring injection result {:?}, already resolved as {:?}",
                result,
                *current
            );
            return false;
        }

        *current = result;
        true
    }

    pub fn add_pending_foreground_dispatch(&self) -> u32 {
        self.pending_foreground_dispatches.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Mark one foreground dispatch as finished, returning how many remain
    pub fn finish_foreground_dispatch(&self) -> u32 {
        let previous = self
            .pending_foreground_dispatches
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| Some(n.saturating_sub(1)))
            .unwrap_or(0);
        previous.saturating_sub(1)
    }

    pub fn pending_foreground_dispatches(&self) -> u32 {
        self.pending_foreground_dispatches.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_is_set_once() {
        let state = InjectionState::new(Some(Uid(10_001)), false);
        assert_eq!(state.result(), InjectionResult::Pending);

        assert!(state.set_result(InjectionResult::Succeeded));
        assert!(!state.set_result(InjectionResult::TimedOut));
        assert_eq!(state.result(), InjectionResult::Succeeded);
    }

    #[test]
    fn test_pending_is_not_a_result() {
        let state = InjectionState::new(None, true);
        assert!(!state.set_result(InjectionResult::Pending));
        assert!(state.set_result(InjectionResult::PermissionDenied));
    }

    #[test]
    fn test_foreground_dispatch_counting() {
        let state = InjectionState::new(None, false);
        assert_eq!(state.add_pending_foreground_dispatch(), 1);
        assert_eq!(state.add_pending_foreground_dispatch(), 2);
        assert_eq!(state.finish_foreground_dispatch(), 1);
        assert_eq!(state.finish_foreground_dispatch(), 0);
        // Never underflows
        assert_eq!(state.finish_foreground_dispatch(), 0);
        assert_eq!(state.pending_foreground_dispatches(), 0);
    }
}
