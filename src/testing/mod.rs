//! Fluent builders for test fixtures
//!
//! Produce fully-populated entries with sensible defaults: device 1, the
//! default display, event time "now" and `FILTERED | PASS_TO_USER` policy.
//! Only compiled for tests or with the `test-utils` feature.

use crate::entry::{EventEntry, InjectionState, KeyEntry, MotionEntry};
use crate::error::EntryResult;
use crate::input::{
    is_valid_cursor_position, DeviceId, EventId, KeyAction, KeyCode, KeyFlags, LogicalDisplayId,
    MotionAction, MotionAxis, MotionClassification, MotionFlags, Nsecs, Pointer, PointerCoords,
    PointerProperties, Pointers, PolicyFlags, Source, ToolType, INVALID_CURSOR_POSITION, META_NONE,
};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

pub const DEFAULT_DEVICE_ID: DeviceId = DeviceId(1);

pub const DEFAULT_POLICY_FLAGS: PolicyFlags =
    PolicyFlags::FILTERED.union(PolicyFlags::PASS_TO_USER);

/// Monotonic nanoseconds since the first call in this process
pub fn now() -> Nsecs {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = *EPOCH.get_or_init(Instant::now);
    // Start at 1 so that "now" is never mistaken for an unset time
    epoch.elapsed().as_nanos() as Nsecs + 1
}

/// Next fixture event id, unique within the process
pub fn next_event_id() -> EventId {
    static NEXT_ID: AtomicI32 = AtomicI32::new(1);
    EventId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

#[derive(Debug, Clone)]
pub struct PointerBuilder {
    properties: PointerProperties,
    coords: PointerCoords,
}

impl PointerBuilder {
    pub fn new(id: i32, tool_type: ToolType) -> Self {
        Self {
            properties: PointerProperties::new(id, tool_type),
            coords: PointerCoords::new(),
        }
    }

    pub fn x(self, x: f32) -> Self {
        self.axis(MotionAxis::X, x)
    }

    pub fn y(self, y: f32) -> Self {
        self.axis(MotionAxis::Y, y)
    }

    pub fn axis(mut self, axis: MotionAxis, value: f32) -> Self {
        self.coords.set_axis_value(axis, value);
        self
    }

    pub fn is_resampled(mut self, is_resampled: bool) -> Self {
        self.coords.is_resampled = is_resampled;
        self
    }

    pub fn build(self) -> Pointer {
        Pointer {
            properties: self.properties,
            coords: self.coords,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyEntryBuilder {
    id: EventId,
    injection_state: Option<Arc<InjectionState>>,
    action: KeyAction,
    source: Source,
    device_id: DeviceId,
    display_id: LogicalDisplayId,
    event_time: Nsecs,
    down_time: Nsecs,
    policy_flags: PolicyFlags,
    flags: KeyFlags,
    key_code: KeyCode,
    scan_code: i32,
    meta_state: i32,
    repeat_count: i32,
}

impl KeyEntryBuilder {
    pub fn new(action: KeyAction, source: Source) -> Self {
        let event_time = now();
        Self {
            id: next_event_id(),
            injection_state: None,
            action,
            source,
            device_id: DEFAULT_DEVICE_ID,
            display_id: LogicalDisplayId::DEFAULT,
            event_time,
            down_time: event_time,
            policy_flags: DEFAULT_POLICY_FLAGS,
            flags: KeyFlags::empty(),
            key_code: KeyCode::UNKNOWN,
            scan_code: 0,
            meta_state: META_NONE,
            repeat_count: 0,
        }
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.id = id;
        self
    }

    pub fn injection_state(mut self, state: Arc<InjectionState>) -> Self {
        self.injection_state = Some(state);
        self
    }

    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = device_id;
        self
    }

    pub fn display_id(mut self, display_id: LogicalDisplayId) -> Self {
        self.display_id = display_id;
        self
    }

    pub fn event_time(mut self, event_time: Nsecs) -> Self {
        self.event_time = event_time;
        self
    }

    pub fn down_time(mut self, down_time: Nsecs) -> Self {
        self.down_time = down_time;
        self
    }

    pub fn policy_flags(mut self, policy_flags: PolicyFlags) -> Self {
        self.policy_flags = policy_flags;
        self
    }

    pub fn add_flag(mut self, flags: KeyFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn key_code(mut self, key_code: KeyCode) -> Self {
        self.key_code = key_code;
        self
    }

    pub fn scan_code(mut self, scan_code: i32) -> Self {
        self.scan_code = scan_code;
        self
    }

    pub fn meta_state(mut self, meta_state: i32) -> Self {
        self.meta_state = meta_state;
        self
    }

    pub fn repeat_count(mut self, repeat_count: i32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub fn build(self) -> EventEntry {
        EventEntry::key(
            self.id,
            self.injection_state,
            self.event_time,
            self.policy_flags,
            KeyEntry {
                device_id: self.device_id,
                source: self.source,
                display_id: self.display_id,
                action: self.action,
                flags: self.flags,
                key_code: self.key_code,
                scan_code: self.scan_code,
                meta_state: self.meta_state,
                repeat_count: self.repeat_count,
                down_time: self.down_time,
            },
        )
    }
}

#[derive(Debug, Clone)]
pub struct MotionEntryBuilder {
    id: EventId,
    injection_state: Option<Arc<InjectionState>>,
    action: MotionAction,
    source: Source,
    device_id: DeviceId,
    display_id: LogicalDisplayId,
    event_time: Nsecs,
    down_time: Nsecs,
    policy_flags: PolicyFlags,
    action_button: i32,
    button_state: i32,
    meta_state: i32,
    flags: MotionFlags,
    classification: MotionClassification,
    x_cursor_position: f32,
    y_cursor_position: f32,
    pointers: Vec<Pointer>,
}

impl MotionEntryBuilder {
    pub fn new(action: MotionAction, source: Source) -> Self {
        let event_time = now();
        Self {
            id: next_event_id(),
            injection_state: None,
            action,
            source,
            device_id: DEFAULT_DEVICE_ID,
            display_id: LogicalDisplayId::DEFAULT,
            event_time,
            down_time: event_time,
            policy_flags: DEFAULT_POLICY_FLAGS,
            action_button: 0,
            button_state: 0,
            meta_state: META_NONE,
            flags: MotionFlags::empty(),
            classification: MotionClassification::None,
            x_cursor_position: INVALID_CURSOR_POSITION,
            y_cursor_position: INVALID_CURSOR_POSITION,
            pointers: Vec::new(),
        }
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.id = id;
        self
    }

    pub fn injection_state(mut self, state: Arc<InjectionState>) -> Self {
        self.injection_state = Some(state);
        self
    }

    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = device_id;
        self
    }

    pub fn display_id(mut self, display_id: LogicalDisplayId) -> Self {
        self.display_id = display_id;
        self
    }

    pub fn event_time(mut self, event_time: Nsecs) -> Self {
        self.event_time = event_time;
        self
    }

    pub fn down_time(mut self, down_time: Nsecs) -> Self {
        self.down_time = down_time;
        self
    }

    pub fn policy_flags(mut self, policy_flags: PolicyFlags) -> Self {
        self.policy_flags = policy_flags;
        self
    }

    pub fn action_button(mut self, action_button: i32) -> Self {
        self.action_button = action_button;
        self
    }

    pub fn button_state(mut self, button_state: i32) -> Self {
        self.button_state = button_state;
        self
    }

    pub fn meta_state(mut self, meta_state: i32) -> Self {
        self.meta_state = meta_state;
        self
    }

    pub fn add_flag(mut self, flags: MotionFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn classification(mut self, classification: MotionClassification) -> Self {
        self.classification = classification;
        self
    }

    pub fn cursor_position(mut self, x: f32, y: f32) -> Self {
        self.x_cursor_position = x;
        self.y_cursor_position = y;
        self
    }

    pub fn pointer(mut self, pointer: PointerBuilder) -> Self {
        self.pointers.push(pointer.build());
        self
    }

    /// Build the entry. Fails when no pointer was added.
    pub fn build(self) -> EntryResult<EventEntry> {
        let pointers = Pointers::from_pointers(self.pointers)?;

        let (mut x_cursor, mut y_cursor) = (self.x_cursor_position, self.y_cursor_position);
        // Mice almost always want the cursor at the primary pointer
        if self.source == Source::MOUSE && !is_valid_cursor_position(x_cursor, y_cursor) {
            x_cursor = pointers.primary().coords.x();
            y_cursor = pointers.primary().coords.y();
        }

        Ok(EventEntry::motion(
            self.id,
            self.injection_state,
            self.event_time,
            self.policy_flags,
            MotionEntry {
                device_id: self.device_id,
                source: self.source,
                display_id: self.display_id,
                action: self.action,
                action_button: self.action_button,
                flags: self.flags,
                meta_state: self.meta_state,
                button_state: self.button_state,
                classification: self.classification,
                edge_flags: 0,
                x_precision: 0.0,
                y_precision: 0.0,
                x_cursor_position: x_cursor,
                y_cursor_position: y_cursor,
                down_time: self.down_time,
                pointers,
            },
        ))
    }
}
