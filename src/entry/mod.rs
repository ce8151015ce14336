//! Event entries
//!
//! An `EventEntry` is the immutable in-flight record of one queued input or
//! system occurrence. It is built once by the producer, wrapped in an `Arc`
//! and shared by every dispatch entry created for it.
//!
//! The mutable working state the dispatch loop needs per entry (dispatch in
//! progress, key repeat and interception) is kept outside the entry, in
//! [`crate::dispatch::EntryStateTable`].

pub mod injection;
pub mod key;
pub mod motion;
pub mod notification;
pub mod sensor;

pub use injection::{InjectionResult, InjectionState};
pub use key::KeyEntry;
pub use motion::MotionEntry;
pub use notification::{
    DeviceResetEntry, DragEntry, FocusEntry, PointerCaptureChangedEntry, TouchModeEntry,
};
pub use sensor::SensorEntry;

use crate::config::EntryConfig;
use crate::input::{
    ConnectionToken, DeviceId, EventId, LogicalDisplayId, Nsecs, PointerCaptureRequest, PolicyFlags,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Kind of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Key,
    Motion,
    Sensor,
    DeviceReset,
    Focus,
    PointerCaptureChanged,
    Drag,
    TouchModeChanged,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Key => "KEY",
            EventType::Motion => "MOTION",
            EventType::Sensor => "SENSOR",
            EventType::DeviceReset => "DEVICE_RESET",
            EventType::Focus => "FOCUS",
            EventType::PointerCaptureChanged => "POINTER_CAPTURE_CHANGED",
            EventType::Drag => "DRAG",
            EventType::TouchModeChanged => "TOUCH_MODE_CHANGED",
        };
        f.write_str(name)
    }
}

/// How much detail entry descriptions may contain
///
/// `Redacted` keeps key codes, coordinates and sensor values out of logs by
/// reducing every description to the entry's type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DescriptionMode {
    #[default]
    Redacted,
    Detailed,
}

impl From<&EntryConfig> for DescriptionMode {
    fn from(config: &EntryConfig) -> Self {
        if config.debuggable {
            DescriptionMode::Detailed
        } else {
            DescriptionMode::Redacted
        }
    }
}

/// Fields common to every entry
#[derive(Debug, Clone)]
pub struct EntryHeader {
    pub id: EventId,
    pub event_time: Nsecs,
    pub policy_flags: PolicyFlags,
    pub injection_state: Option<Arc<InjectionState>>,
}

/// Per-type payload of an entry
#[derive(Debug, Clone)]
pub enum EntryPayload {
    Key(KeyEntry),
    Motion(MotionEntry),
    Sensor(SensorEntry),
    DeviceReset(DeviceResetEntry),
    Focus(FocusEntry),
    PointerCaptureChanged(PointerCaptureChangedEntry),
    Drag(DragEntry),
    TouchMode(TouchModeEntry),
}

impl EntryPayload {
    pub fn event_type(&self) -> EventType {
        match self {
            EntryPayload::Key(_) => EventType::Key,
            EntryPayload::Motion(_) => EventType::Motion,
            EntryPayload::Sensor(_) => EventType::Sensor,
            EntryPayload::DeviceReset(_) => EventType::DeviceReset,
            EntryPayload::Focus(_) => EventType::Focus,
            EntryPayload::PointerCaptureChanged(_) => EventType::PointerCaptureChanged,
            EntryPayload::Drag(_) => EventType::Drag,
            EntryPayload::TouchMode(_) => EventType::TouchModeChanged,
        }
    }

    /// Coarse name used by redacted descriptions
    pub fn name(&self) -> &'static str {
        match self {
            EntryPayload::Key(_) => KeyEntry::NAME,
            EntryPayload::Motion(_) => MotionEntry::NAME,
            EntryPayload::Sensor(_) => SensorEntry::NAME,
            EntryPayload::DeviceReset(_) => DeviceResetEntry::NAME,
            EntryPayload::Focus(_) => FocusEntry::NAME,
            EntryPayload::PointerCaptureChanged(_) => PointerCaptureChangedEntry::NAME,
            EntryPayload::Drag(_) => DragEntry::NAME,
            EntryPayload::TouchMode(_) => TouchModeEntry::NAME,
        }
    }
}

/// Immutable record of one queued input or system occurrence
#[derive(Debug, Clone)]
pub struct EventEntry {
    header: EntryHeader,
    payload: EntryPayload,
}

impl EventEntry {
    fn new(header: EntryHeader, payload: EntryPayload) -> Self {
        Self { header, payload }
    }

    pub fn key(
        id: EventId,
        injection_state: Option<Arc<InjectionState>>,
        event_time: Nsecs,
        policy_flags: PolicyFlags,
        key: KeyEntry,
    ) -> Self {
        Self::new(
            EntryHeader {
                id,
                event_time,
                policy_flags,
                injection_state,
            },
            EntryPayload::Key(key),
        )
    }

    pub fn motion(
        id: EventId,
        injection_state: Option<Arc<InjectionState>>,
        event_time: Nsecs,
        policy_flags: PolicyFlags,
        motion: MotionEntry,
    ) -> Self {
        Self::new(
            EntryHeader {
                id,
                event_time,
                policy_flags,
                injection_state,
            },
            EntryPayload::Motion(motion),
        )
    }

    pub fn sensor(
        id: EventId,
        event_time: Nsecs,
        policy_flags: PolicyFlags,
        sensor: SensorEntry,
    ) -> Self {
        Self::new(Self::system_header(id, event_time, policy_flags), EntryPayload::Sensor(sensor))
    }

    pub fn device_reset(id: EventId, event_time: Nsecs, device_id: DeviceId) -> Self {
        Self::new(
            Self::system_header(id, event_time, PolicyFlags::empty()),
            EntryPayload::DeviceReset(DeviceResetEntry { device_id }),
        )
    }

    pub fn focus(
        id: EventId,
        event_time: Nsecs,
        connection_token: ConnectionToken,
        has_focus: bool,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(
            Self::system_header(id, event_time, PolicyFlags::PASS_TO_USER),
            EntryPayload::Focus(FocusEntry {
                connection_token,
                has_focus,
                reason: reason.into(),
            }),
        )
    }

    pub fn pointer_capture_changed(
        id: EventId,
        event_time: Nsecs,
        request: PointerCaptureRequest,
    ) -> Self {
        Self::new(
            Self::system_header(id, event_time, PolicyFlags::PASS_TO_USER),
            EntryPayload::PointerCaptureChanged(PointerCaptureChangedEntry { request }),
        )
    }

    pub fn drag(
        id: EventId,
        event_time: Nsecs,
        connection_token: ConnectionToken,
        is_exiting: bool,
        x: f32,
        y: f32,
    ) -> Self {
        Self::new(
            Self::system_header(id, event_time, PolicyFlags::PASS_TO_USER),
            EntryPayload::Drag(DragEntry {
                connection_token,
                is_exiting,
                x,
                y,
            }),
        )
    }

    pub fn touch_mode(
        id: EventId,
        event_time: Nsecs,
        in_touch_mode: bool,
        display_id: LogicalDisplayId,
    ) -> Self {
        Self::new(
            Self::system_header(id, event_time, PolicyFlags::PASS_TO_USER),
            EntryPayload::TouchMode(TouchModeEntry {
                in_touch_mode,
                display_id,
            }),
        )
    }

    fn system_header(id: EventId, event_time: Nsecs, policy_flags: PolicyFlags) -> EntryHeader {
        EntryHeader {
            id,
            event_time,
            policy_flags,
            injection_state: None,
        }
    }

    pub fn header(&self) -> &EntryHeader {
        &self.header
    }

    pub fn payload(&self) -> &EntryPayload {
        &self.payload
    }

    pub fn id(&self) -> EventId {
        self.header.id
    }

    pub fn event_type(&self) -> EventType {
        self.payload.event_type()
    }

    pub fn event_time(&self) -> Nsecs {
        self.header.event_time
    }

    pub fn policy_flags(&self) -> PolicyFlags {
        self.header.policy_flags
    }

    pub fn injection_state(&self) -> Option<&Arc<InjectionState>> {
        self.header.injection_state.as_ref()
    }

    pub fn is_injected(&self) -> bool {
        self.header.injection_state.is_some()
    }

    pub fn as_key(&self) -> Option<EntryRef<'_, KeyEntry>> {
        match &self.payload {
            EntryPayload::Key(key) => Some(EntryRef::new(&self.header, key)),
            _ => None,
        }
    }

    pub fn as_motion(&self) -> Option<EntryRef<'_, MotionEntry>> {
        match &self.payload {
            EntryPayload::Motion(motion) => Some(EntryRef::new(&self.header, motion)),
            _ => None,
        }
    }

    pub fn as_sensor(&self) -> Option<EntryRef<'_, SensorEntry>> {
        match &self.payload {
            EntryPayload::Sensor(sensor) => Some(EntryRef::new(&self.header, sensor)),
            _ => None,
        }
    }

    /// Human-readable description, redacted unless `mode` is `Detailed`
    pub fn description(&self, mode: DescriptionMode) -> String {
        if mode == DescriptionMode::Redacted {
            return self.payload.name().to_string();
        }

        match &self.payload {
            EntryPayload::Key(key) => key.describe(&self.header),
            EntryPayload::Motion(motion) => motion.describe(&self.header),
            EntryPayload::Sensor(sensor) => sensor.describe(&self.header),
            EntryPayload::DeviceReset(reset) => reset.describe(&self.header),
            EntryPayload::Focus(focus) => focus.describe(),
            EntryPayload::PointerCaptureChanged(capture) => capture.describe(),
            EntryPayload::Drag(drag) => drag.describe(),
            EntryPayload::TouchMode(touch_mode) => touch_mode.describe(),
        }
    }
}

/// Borrowed view of an entry whose payload is known to be `T`
///
/// Derefs to the payload; the common header is available through `header`.
#[derive(Debug)]
pub struct EntryRef<'a, T> {
    pub header: &'a EntryHeader,
    pub payload: &'a T,
}

impl<'a, T> EntryRef<'a, T> {
    pub fn new(header: &'a EntryHeader, payload: &'a T) -> Self {
        Self { header, payload }
    }

    pub fn event_time(&self) -> Nsecs {
        self.header.event_time
    }
}

impl<T> Clone for EntryRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntryRef<'_, T> {}

impl<T> Deref for EntryRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.payload
    }
}
