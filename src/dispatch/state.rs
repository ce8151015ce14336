//! Mutable per-entry working state owned by the dispatch loop
//!
//! Entries themselves are immutable and shared across threads. The few fields
//! the dispatch loop has to update while it works on an entry live here,
//! keyed by event id, and are only reachable through `&mut self`.

use crate::entry::{EventEntry, EventType};
use crate::input::{EventId, Nsecs};
use std::collections::HashMap;

/// Outcome of asking the policy whether to intercept a key before dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterceptKeyResult {
    #[default]
    Unknown,
    Skip,
    Continue,
    TryAgainLater,
}

/// Key repeat and interception bookkeeping for one key entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyRepeatState {
    /// The entry was synthesized by key repeat
    pub synthetic_repeat: bool,
    pub intercept_key_result: InterceptKeyResult,
    /// When to retry after `TryAgainLater`
    pub intercept_key_wakeup_time: Nsecs,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryDispatchState {
    pub dispatch_in_progress: bool,
    /// Present for key entries only
    pub key: Option<KeyRepeatState>,
}

#[derive(Debug, Default)]
pub struct EntryStateTable {
    states: HashMap<EventId, EntryDispatchState>,
}

impl EntryStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an entry, returning its (possibly existing) state
    pub fn track(&mut self, entry: &EventEntry) -> &mut EntryDispatchState {
        let is_key = entry.event_type() == EventType::Key;
        self.states.entry(entry.id()).or_insert_with(|| EntryDispatchState {
            dispatch_in_progress: false,
            key: is_key.then(KeyRepeatState::default),
        })
    }

    pub fn get(&self, id: EventId) -> Option<&EntryDispatchState> {
        self.states.get(&id)
    }

    /// Mark an entry as being delivered. Returns false if it is not tracked.
    pub fn begin_dispatch(&mut self, id: EventId) -> bool {
        match self.states.get_mut(&id) {
            Some(state) => {
                state.dispatch_in_progress = true;
                true
            }
            None => {
                tracing::debug!("begin_dispatch for untracked event {}", id);
                false
            }
        }
    }

    pub fn finish_dispatch(&mut self, id: EventId) -> bool {
        match self.states.get_mut(&id) {
            Some(state) => {
                state.dispatch_in_progress = false;
                true
            }
            None => false,
        }
    }

    pub fn is_dispatch_in_progress(&self, id: EventId) -> bool {
        self.states
            .get(&id)
            .map(|state| state.dispatch_in_progress)
            .unwrap_or(false)
    }

    pub fn key_state(&self, id: EventId) -> Option<&KeyRepeatState> {
        self.states.get(&id).and_then(|state| state.key.as_ref())
    }

    pub fn key_state_mut(&mut self, id: EventId) -> Option<&mut KeyRepeatState> {
        self.states.get_mut(&id).and_then(|state| state.key.as_mut())
    }

    /// Stop tracking an entry once the dispatch loop is done with it
    pub fn release(&mut self, id: EventId) -> Option<EntryDispatchState> {
        self.states.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::KeyEntry;
    use crate::input::{
        ConnectionToken, DeviceId, KeyAction, KeyCode, KeyFlags, LogicalDisplayId, PolicyFlags,
        Source,
    };

    fn key(id: i32) -> EventEntry {
        EventEntry::key(
            EventId(id),
            None,
            0,
            PolicyFlags::empty(),
            KeyEntry {
                device_id: DeviceId(1),
                source: Source::KEYBOARD,
                display_id: LogicalDisplayId::DEFAULT,
                action: KeyAction::Down,
                flags: KeyFlags::empty(),
                key_code: KeyCode::SPACE,
                scan_code: 57,
                meta_state: 0,
                repeat_count: 0,
                down_time: 0,
            },
        )
    }

    #[test]
    fn test_key_entries_get_fresh_key_state() {
        let mut table = EntryStateTable::new();
        let entry = key(1);
        let state = table.track(&entry);

        assert!(!state.dispatch_in_progress);
        assert_eq!(state.key, Some(KeyRepeatState::default()));
        assert_eq!(
            table.key_state(entry.id()).unwrap().intercept_key_result,
            InterceptKeyResult::Unknown
        );
    }

    #[test]
    fn test_other_entries_have_no_key_state() {
        let mut table = EntryStateTable::new();
        let focus = EventEntry::focus(EventId(2), 0, ConnectionToken::new(), true, "test");
        table.track(&focus);
        assert!(table.key_state(focus.id()).is_none());
        assert!(table.key_state_mut(focus.id()).is_none());
    }

    #[test]
    fn test_dispatch_in_progress_lifecycle() {
        let mut table = EntryStateTable::new();
        let entry = key(3);
        table.track(&entry);

        assert!(!table.is_dispatch_in_progress(entry.id()));
        assert!(table.begin_dispatch(entry.id()));
        assert!(table.is_dispatch_in_progress(entry.id()));
        assert!(table.finish_dispatch(entry.id()));
        assert!(!table.is_dispatch_in_progress(entry.id()));

        assert!(table.release(entry.id()).is_some());
        assert!(table.is_empty());
        assert!(!table.begin_dispatch(entry.id()));
    }

    #[test]
    fn test_key_state_updates() {
        let mut table = EntryStateTable::new();
        let entry = key(4);
        table.track(&entry);

        let state = table.key_state_mut(entry.id()).unwrap();
        state.synthetic_repeat = true;
        state.intercept_key_result = InterceptKeyResult::TryAgainLater;
        state.intercept_key_wakeup_time = 9_000;

        let state = table.key_state(entry.id()).unwrap();
        assert!(state.synthetic_repeat);
        assert_eq!(state.intercept_key_result, InterceptKeyResult::TryAgainLater);
        assert_eq!(state.intercept_key_wakeup_time, 9_000);
    }

    #[test]
    fn test_track_is_idempotent() {
        let mut table = EntryStateTable::new();
        let entry = key(5);
        table.track(&entry).dispatch_in_progress = true;
        table.track(&entry);
        assert!(table.is_dispatch_in_progress(entry.id()));
        assert_eq!(table.len(), 1);
    }
}
