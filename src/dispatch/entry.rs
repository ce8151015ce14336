use super::sequence::{Seq, SequenceAllocator};
use crate::entry::{DescriptionMode, EntryPayload, EventEntry};
use crate::input::{InputTargetFlags, Nsecs, Transform, Uid};
use std::fmt;
use std::sync::Arc;

/// Everything resolved about one delivery target
#[derive(Debug, Clone)]
pub struct DispatchTarget {
    pub target_flags: InputTargetFlags,
    /// Display to window coordinate transform
    pub transform: Transform,
    /// Display's raw transform, used for verified events
    pub raw_transform: Transform,
    pub global_scale_factor: f32,
    pub target_uid: Uid,
    pub vsync_id: i64,
    pub window_id: Option<i32>,
}

impl Default for DispatchTarget {
    fn default() -> Self {
        Self {
            target_flags: InputTargetFlags::empty(),
            transform: Transform::IDENTITY,
            raw_transform: Transform::IDENTITY,
            global_scale_factor: 1.0,
            target_uid: Uid::INVALID,
            vsync_id: 0,
            window_id: None,
        }
    }
}

/// A shared entry queued for delivery to one connection
///
/// Created per target at dispatch time and dropped once delivery is
/// acknowledged or abandoned. The underlying `EventEntry` is shared, not
/// copied, between all dispatch entries created for it.
#[derive(Debug)]
pub struct DispatchEntry {
    pub seq: Seq,
    pub event_entry: Arc<EventEntry>,
    pub target_flags: InputTargetFlags,
    pub transform: Transform,
    pub raw_transform: Transform,
    pub global_scale_factor: f32,
    /// Key or motion flags at construction time, 0 for other entry types
    pub resolved_flags: u32,
    pub target_uid: Uid,
    pub vsync_id: i64,
    pub window_id: Option<i32>,
    delivery_time: Nsecs,
}

impl DispatchEntry {
    pub fn new(
        event_entry: Arc<EventEntry>,
        target: DispatchTarget,
        sequences: &SequenceAllocator,
    ) -> Self {
        let resolved_flags = match event_entry.payload() {
            EntryPayload::Key(key) => key.flags.bits(),
            EntryPayload::Motion(motion) => motion.flags.bits(),
            EntryPayload::Sensor(_)
            | EntryPayload::DeviceReset(_)
            | EntryPayload::Focus(_)
            | EntryPayload::PointerCaptureChanged(_)
            | EntryPayload::Drag(_)
            | EntryPayload::TouchMode(_) => 0,
        };

        let seq = sequences.next_sequence();
        tracing::trace!(
            "Created dispatch entry seq={} for {} event {} (targetFlags={})",
            seq,
            event_entry.event_type(),
            event_entry.id(),
            target.target_flags
        );

        Self {
            seq,
            event_entry,
            target_flags: target.target_flags,
            transform: target.transform,
            raw_transform: target.raw_transform,
            global_scale_factor: target.global_scale_factor,
            resolved_flags,
            target_uid: target.target_uid,
            vsync_id: target.vsync_id,
            window_id: target.window_id,
            delivery_time: 0,
        }
    }

    pub fn has_foreground_target(&self) -> bool {
        self.target_flags.contains(InputTargetFlags::FOREGROUND)
    }

    pub fn is_split(&self) -> bool {
        self.target_flags.contains(InputTargetFlags::SPLIT)
    }

    /// Time the entry was written to the connection, 0 until then
    pub fn delivery_time(&self) -> Nsecs {
        self.delivery_time
    }

    pub fn is_delivered(&self) -> bool {
        self.delivery_time != 0
    }

    pub fn mark_delivered(&mut self, delivery_time: Nsecs) {
        self.delivery_time = delivery_time;
    }

    pub fn description(&self, mode: DescriptionMode) -> String {
        format!(
            "DispatchEntry{{seq={}, resolvedFlags=0x{:08x}, targetFlags={}, transform={}}} \
             original: {}",
            self.seq,
            self.resolved_flags,
            self.target_flags,
            self.transform,
            self.event_entry.description(mode)
        )
    }
}

/// Redacted description, safe for release logs
impl fmt::Display for DispatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description(DescriptionMode::Redacted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::KeyEntry;
    use crate::input::{
        ConnectionToken, DeviceId, EventId, KeyAction, KeyCode, KeyFlags, LogicalDisplayId,
        MotionAction, MotionFlags, PolicyFlags, Source, ToolType,
    };
    use crate::testing::{MotionEntryBuilder, PointerBuilder};
    use std::collections::HashSet;

    fn key_entry(flags: KeyFlags) -> Arc<EventEntry> {
        Arc::new(EventEntry::key(
            EventId(11),
            None,
            100,
            PolicyFlags::PASS_TO_USER,
            KeyEntry {
                device_id: DeviceId(1),
                source: Source::KEYBOARD,
                display_id: LogicalDisplayId::DEFAULT,
                action: KeyAction::Up,
                flags,
                key_code: KeyCode::BACK,
                scan_code: 158,
                meta_state: 0,
                repeat_count: 0,
                down_time: 90,
            },
        ))
    }

    #[test]
    fn test_resolved_flags_snapshot_key_flags() {
        let sequences = SequenceAllocator::new();
        let flags = KeyFlags::CANCELED | KeyFlags::TRACKING;
        let dispatch = DispatchEntry::new(key_entry(flags), DispatchTarget::default(), &sequences);
        assert_eq!(dispatch.resolved_flags, flags.bits());
    }

    #[test]
    fn test_resolved_flags_snapshot_full_motion_flags() {
        let sequences = SequenceAllocator::new();
        let entry = MotionEntryBuilder::new(MotionAction::DOWN, Source::TOUCHSCREEN)
            .add_flag(MotionFlags::TAINTED | MotionFlags::WINDOW_IS_OBSCURED)
            .pointer(PointerBuilder::new(0, ToolType::Finger).x(10.0).y(20.0))
            .build()
            .unwrap();

        let dispatch = DispatchEntry::new(Arc::new(entry), DispatchTarget::default(), &sequences);

        // Unverified bits stay in the snapshot
        assert_eq!(dispatch.resolved_flags, 0x8000_0001);
    }

    #[test]
    fn test_default_target_uses_identity_transforms() {
        let target = DispatchTarget::default();
        assert!(target.transform.is_identity());
        assert!(target.raw_transform.is_identity());
        assert_eq!(target.global_scale_factor, 1.0);
        assert_eq!(target.target_uid, Uid::INVALID);
        assert!(target.target_flags.is_empty());
    }

    #[test]
    fn test_resolved_flags_zero_for_other_entries() {
        let sequences = SequenceAllocator::new();
        let focus = Arc::new(EventEntry::focus(
            EventId(1),
            0,
            ConnectionToken::new(),
            true,
            "test",
        ));
        let dispatch = DispatchEntry::new(focus, DispatchTarget::default(), &sequences);
        assert_eq!(dispatch.resolved_flags, 0);
    }

    #[test]
    fn test_entries_share_event_entry() {
        let sequences = SequenceAllocator::new();
        let entry = key_entry(KeyFlags::empty());

        let first = DispatchEntry::new(entry.clone(), DispatchTarget::default(), &sequences);
        let second = DispatchEntry::new(entry.clone(), DispatchTarget::default(), &sequences);

        assert!(Arc::ptr_eq(&first.event_entry, &second.event_entry));
        assert_eq!(Arc::strong_count(&entry), 3);
        assert_ne!(first.seq, second.seq);

        drop(first);
        drop(second);
        assert_eq!(Arc::strong_count(&entry), 1);
    }

    #[test]
    fn test_each_construction_allocates_one_sequence() {
        let sequences = SequenceAllocator::new();
        let entry = key_entry(KeyFlags::empty());
        let seqs: Vec<u32> = (0..3)
            .map(|_| {
                DispatchEntry::new(entry.clone(), DispatchTarget::default(), &sequences)
                    .seq
                    .get()
            })
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
        assert_eq!(sequences.next_sequence().get(), 4);
    }

    #[test]
    fn test_target_fields_are_copied() {
        let sequences = SequenceAllocator::new();
        let target = DispatchTarget {
            target_flags: InputTargetFlags::FOREGROUND | InputTargetFlags::SPLIT,
            transform: Transform::from_translation(-10.0, -20.0),
            raw_transform: Transform::from_scale(2.0, 2.0),
            global_scale_factor: 0.5,
            target_uid: Uid(10_042),
            vsync_id: 77,
            window_id: Some(3),
        };
        let dispatch = DispatchEntry::new(key_entry(KeyFlags::empty()), target, &sequences);

        assert!(dispatch.has_foreground_target());
        assert!(dispatch.is_split());
        assert_eq!(dispatch.transform, Transform::from_translation(-10.0, -20.0));
        assert_eq!(dispatch.raw_transform, Transform::from_scale(2.0, 2.0));
        assert_eq!(dispatch.global_scale_factor, 0.5);
        assert_eq!(dispatch.target_uid, Uid(10_042));
        assert_eq!(dispatch.vsync_id, 77);
        assert_eq!(dispatch.window_id, Some(3));
    }

    #[test]
    fn test_delivery_time_starts_unset() {
        let sequences = SequenceAllocator::new();
        let mut dispatch =
            DispatchEntry::new(key_entry(KeyFlags::empty()), DispatchTarget::default(), &sequences);

        assert_eq!(dispatch.delivery_time(), 0);
        assert!(!dispatch.is_delivered());
        dispatch.mark_delivered(5_000);
        assert_eq!(dispatch.delivery_time(), 5_000);
        assert!(dispatch.is_delivered());
    }

    #[test]
    fn test_concurrent_construction_yields_distinct_sequences() {
        let sequences = Arc::new(SequenceAllocator::new());
        let entry = key_entry(KeyFlags::empty());

        let handles: Vec<_> = (0..3)
            .map(|_| {
                let sequences = sequences.clone();
                let entry = entry.clone();
                std::thread::spawn(move || {
                    DispatchEntry::new(entry, DispatchTarget::default(), &sequences).seq
                })
            })
            .collect();

        let seqs: HashSet<Seq> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(seqs.len(), 3);
        assert!(seqs.iter().all(|seq| seq.get() != 0));
    }

    #[test]
    fn test_description_respects_mode() {
        let sequences = SequenceAllocator::new();
        let dispatch = DispatchEntry::new(
            key_entry(KeyFlags::CANCELED),
            DispatchTarget {
                target_flags: InputTargetFlags::FOREGROUND,
                ..Default::default()
            },
            &sequences,
        );

        let redacted = dispatch.description(DescriptionMode::Redacted);
        assert_eq!(
            redacted,
            "DispatchEntry{seq=1, resolvedFlags=0x00000020, targetFlags=FOREGROUND, \
             transform=[1.0000 0.0000 0.0000; 0.0000 1.0000 0.0000]} original: KeyEvent"
        );
        assert!(dispatch
            .description(DescriptionMode::Detailed)
            .contains("keyCode=BACK(4)"));
        assert_eq!(dispatch.to_string(), redacted);
    }
}
