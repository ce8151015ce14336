//! Verified events
//!
//! A verified event is the minimal, fixed-shape projection of a key or motion
//! entry that gets signed before delivery. The receiving application can
//! check the signature to confirm that the event came from the dispatcher and
//! was not altered.
//!
//! Derivation is pure: it depends only on the entry and, for motion, the
//! display's raw transform. Per-window transforms and dispatch state never
//! influence the result, so signatures stay stable across targets.

use crate::entry::{EntryRef, EventEntry, KeyEntry, MotionEntry};
use crate::input::{
    DeviceId, KeyAction, KeyCode, KeyFlags, LogicalDisplayId, MotionAction, MotionFlags, Nsecs,
    Source, Transform, VERIFIED_KEY_EVENT_FLAGS, VERIFIED_MOTION_EVENT_FLAGS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerifiedEventType {
    Key,
    Motion,
}

/// Header shared by verified key and motion events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedInputEvent {
    pub event_type: VerifiedEventType,
    pub device_id: DeviceId,
    pub event_time: Nsecs,
    pub source: Source,
    pub display_id: LogicalDisplayId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedKeyEvent {
    pub header: VerifiedInputEvent,
    pub action: KeyAction,
    /// Only the bits in `VERIFIED_KEY_EVENT_FLAGS`
    pub flags: KeyFlags,
    pub down_time: Nsecs,
    pub key_code: KeyCode,
    pub scan_code: i32,
    pub meta_state: i32,
    pub repeat_count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedMotionEvent {
    pub header: VerifiedInputEvent,
    /// Pointer 0 in the display's raw coordinate space
    pub raw_x: f32,
    pub raw_y: f32,
    /// Base action, pointer index bits cleared
    pub action_masked: MotionAction,
    /// Only the bits in `VERIFIED_MOTION_EVENT_FLAGS`
    pub flags: MotionFlags,
    pub down_time: Nsecs,
    pub meta_state: i32,
    pub button_state: i32,
}

/// Either kind of verified event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VerifiedEvent {
    Key(VerifiedKeyEvent),
    Motion(VerifiedMotionEvent),
}

impl VerifiedEvent {
    pub fn header(&self) -> &VerifiedInputEvent {
        match self {
            VerifiedEvent::Key(key) => &key.header,
            VerifiedEvent::Motion(motion) => &motion.header,
        }
    }
}

pub fn verified_key_event(entry: EntryRef<'_, KeyEntry>) -> VerifiedKeyEvent {
    VerifiedKeyEvent {
        header: VerifiedInputEvent {
            event_type: VerifiedEventType::Key,
            device_id: entry.device_id,
            event_time: entry.event_time(),
            source: entry.source,
            display_id: entry.display_id,
        },
        action: entry.action,
        flags: entry.flags & VERIFIED_KEY_EVENT_FLAGS,
        down_time: entry.down_time,
        key_code: entry.key_code,
        scan_code: entry.scan_code,
        meta_state: entry.meta_state,
        repeat_count: entry.repeat_count,
    }
}

/// Derive the verified form of a motion entry
///
/// `raw_transform` is the display's raw transform, never the target window's.
/// Pointer 0 is transformed with the rule chosen by the entry's source.
pub fn verified_motion_event(
    entry: EntryRef<'_, MotionEntry>,
    raw_transform: &Transform,
) -> VerifiedMotionEvent {
    let raw_xy =
        raw_transform.transform_xy_for_source(entry.source, entry.pointers.primary().coords.xy());

    VerifiedMotionEvent {
        header: VerifiedInputEvent {
            event_type: VerifiedEventType::Motion,
            device_id: entry.device_id,
            event_time: entry.event_time(),
            source: entry.source,
            display_id: entry.display_id,
        },
        raw_x: raw_xy.x,
        raw_y: raw_xy.y,
        action_masked: entry.action.masked(),
        flags: entry.flags & VERIFIED_MOTION_EVENT_FLAGS,
        down_time: entry.down_time,
        meta_state: entry.meta_state,
        button_state: entry.button_state,
    }
}

impl EntryRef<'_, KeyEntry> {
    pub fn to_verified(&self) -> VerifiedKeyEvent {
        verified_key_event(*self)
    }
}

impl EntryRef<'_, MotionEntry> {
    pub fn to_verified(&self, raw_transform: &Transform) -> VerifiedMotionEvent {
        verified_motion_event(*self, raw_transform)
    }
}

/// Verified form of any entry that has one (key and motion only)
pub fn verified_event(entry: &EventEntry, raw_transform: &Transform) -> Option<VerifiedEvent> {
    if let Some(key) = entry.as_key() {
        return Some(VerifiedEvent::Key(verified_key_event(key)));
    }
    entry
        .as_motion()
        .map(|motion| VerifiedEvent::Motion(verified_motion_event(motion, raw_transform)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EventEntry;
    use crate::input::{
        ConnectionToken, EventId, PointerCoords, PointerProperties, Pointers, PolicyFlags, ToolType,
    };

    fn key(flags: KeyFlags) -> EventEntry {
        EventEntry::key(
            EventId(1),
            None,
            2_000,
            PolicyFlags::PASS_TO_USER,
            KeyEntry {
                device_id: DeviceId(4),
                source: Source::KEYBOARD,
                display_id: LogicalDisplayId(1),
                action: KeyAction::Down,
                flags,
                key_code: KeyCode::ENTER,
                scan_code: 28,
                meta_state: 0x1,
                repeat_count: 2,
                down_time: 1_500,
            },
        )
    }

    fn motion(source: Source, action: MotionAction, flags: MotionFlags) -> EventEntry {
        let pointers = Pointers::new(
            vec![
                PointerProperties::new(0, ToolType::Finger),
                PointerProperties::new(1, ToolType::Finger),
            ],
            vec![PointerCoords::from_xy(10.0, 20.0), PointerCoords::from_xy(300.0, 400.0)],
        )
        .unwrap();

        EventEntry::motion(
            EventId(2),
            None,
            3_000,
            PolicyFlags::PASS_TO_USER,
            MotionEntry {
                device_id: DeviceId(6),
                source,
                display_id: LogicalDisplayId::DEFAULT,
                action,
                action_button: 0,
                flags,
                meta_state: 0,
                button_state: 0x1,
                classification: Default::default(),
                edge_flags: 0,
                x_precision: 1.0,
                y_precision: 1.0,
                x_cursor_position: f32::NAN,
                y_cursor_position: f32::NAN,
                down_time: 2_900,
                pointers,
            },
        )
    }

    #[test]
    fn test_key_fields_copied_and_flags_masked() {
        let flags =
            KeyFlags::CANCELED | KeyFlags::LONG_PRESS | KeyFlags::from_bits_retain(0x0010_0000);
        let entry = key(flags);
        let verified = verified_key_event(entry.as_key().unwrap());

        assert_eq!(verified.header.event_type, VerifiedEventType::Key);
        assert_eq!(verified.header.device_id, DeviceId(4));
        assert_eq!(verified.header.event_time, 2_000);
        assert_eq!(verified.header.source, Source::KEYBOARD);
        assert_eq!(verified.header.display_id, LogicalDisplayId(1));
        assert_eq!(verified.action, KeyAction::Down);
        assert_eq!(verified.key_code, KeyCode::ENTER);
        assert_eq!(verified.flags, flags & VERIFIED_KEY_EVENT_FLAGS);
        assert_eq!(verified.flags, KeyFlags::CANCELED);
        assert_eq!(verified.down_time, 1_500);
        assert_eq!(verified.scan_code, 28);
        assert_eq!(verified.meta_state, 0x1);
        assert_eq!(verified.repeat_count, 2);
    }

    #[test]
    fn test_key_without_verified_flags() {
        let entry = key(KeyFlags::TAINTED | KeyFlags::FALLBACK);
        let verified = verified_key_event(entry.as_key().unwrap());
        assert!(verified.flags.is_empty());
    }

    #[test]
    fn test_motion_action_is_masked() {
        let action = MotionAction::with_pointer_index(MotionAction::POINTER_DOWN, 1);
        let entry = motion(Source::TOUCHSCREEN, action, MotionFlags::empty());
        let verified = verified_motion_event(entry.as_motion().unwrap(), &Transform::IDENTITY);

        assert_eq!(verified.action_masked, MotionAction::POINTER_DOWN);
        assert_eq!(verified.action_masked.0, action.0 & MotionAction::ACTION_MASK);
    }

    #[test]
    fn test_motion_flags_are_masked() {
        let flags = MotionFlags::WINDOW_IS_OBSCURED
            | MotionFlags::IS_ACCESSIBILITY_EVENT
            | MotionFlags::TAINTED
            | MotionFlags::IS_GENERATED_GESTURE;
        let entry = motion(Source::TOUCHSCREEN, MotionAction::MOVE, flags);
        let verified = verified_motion_event(entry.as_motion().unwrap(), &Transform::IDENTITY);

        assert_eq!(
            verified.flags,
            MotionFlags::WINDOW_IS_OBSCURED | MotionFlags::IS_ACCESSIBILITY_EVENT
        );
    }

    #[test]
    fn test_motion_uses_raw_transform_for_pointer_zero() {
        let entry = motion(Source::TOUCHSCREEN, MotionAction::DOWN, MotionFlags::empty());
        let raw = Transform::from_translation(5.0, -5.0);
        let verified = verified_motion_event(entry.as_motion().unwrap(), &raw);

        assert_eq!((verified.raw_x, verified.raw_y), (15.0, 15.0));
        assert_eq!(verified.header.event_type, VerifiedEventType::Motion);
        assert_eq!(verified.header.event_time, 3_000);
        assert_eq!(verified.down_time, 2_900);
        assert_eq!(verified.button_state, 0x1);
    }

    #[test]
    fn test_joystick_coordinates_are_not_transformed() {
        let entry = motion(Source::JOYSTICK, MotionAction::MOVE, MotionFlags::empty());
        let raw = Transform::from_scale(2.0, 2.0);
        let verified = verified_motion_event(entry.as_motion().unwrap(), &raw);

        assert_eq!((verified.raw_x, verified.raw_y), (10.0, 20.0));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let entry = motion(
            Source::MOUSE,
            MotionAction::HOVER_MOVE,
            MotionFlags::WINDOW_IS_PARTIALLY_OBSCURED,
        );
        let raw = Transform::from_matrix(0.0, -1.0, 100.0, 1.0, 0.0, 0.0);
        let first = verified_motion_event(entry.as_motion().unwrap(), &raw);
        let second = verified_motion_event(entry.as_motion().unwrap(), &raw);
        assert_eq!(first, second);
    }

    #[test]
    fn test_verified_event_only_for_key_and_motion() {
        let raw = Transform::IDENTITY;
        assert!(matches!(
            verified_event(&key(KeyFlags::empty()), &raw),
            Some(VerifiedEvent::Key(_))
        ));
        assert!(matches!(
            verified_event(
                &motion(Source::TOUCHSCREEN, MotionAction::UP, MotionFlags::empty()),
                &raw,
            ),
            Some(VerifiedEvent::Motion(_))
        ));
        let focus = EventEntry::focus(EventId(3), 0, ConnectionToken::new(), true, "test");
        assert!(verified_event(&focus, &raw).is_none());
    }

    #[test]
    fn test_typed_view_methods_match_free_functions() {
        let entry = key(KeyFlags::CANCELED);
        let view = entry.as_key().unwrap();
        assert_eq!(view.to_verified(), verified_key_event(view));

        let entry = motion(Source::TOUCHSCREEN, MotionAction::MOVE, MotionFlags::empty());
        let view = entry.as_motion().unwrap();
        let raw = Transform::from_scale(3.0, 3.0);
        assert_eq!(view.to_verified(&raw), verified_motion_event(view, &raw));
    }

    #[test]
    fn test_verified_event_serializes_with_type_tag() {
        let verified = verified_event(&key(KeyFlags::CANCELED), &Transform::IDENTITY).unwrap();
        let json = serde_json::to_value(verified).unwrap();
        assert_eq!(json["type"], "key");
        assert_eq!(json["header"]["eventType"], "Key");
        assert_eq!(json["header"]["eventTime"], 2_000);
        assert_eq!(json["repeatCount"], 2);
    }
}
