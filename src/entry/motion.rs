use super::EntryHeader;
use crate::input::{
    DeviceId, LogicalDisplayId, MotionAction, MotionClassification, MotionFlags, Nsecs, Pointers,
    Source,
};
use serde::Serialize;

/// Pointer movement, press, hover or scroll
///
/// `pointers` is never empty; index 0 is the primary pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionEntry {
    pub device_id: DeviceId,
    pub source: Source,
    pub display_id: LogicalDisplayId,
    pub action: MotionAction,
    pub action_button: i32,
    pub flags: MotionFlags,
    pub meta_state: i32,
    pub button_state: i32,
    pub classification: MotionClassification,
    pub edge_flags: i32,
    pub x_precision: f32,
    pub y_precision: f32,
    pub x_cursor_position: f32,
    pub y_cursor_position: f32,
    pub down_time: Nsecs,
    pub pointers: Pointers,
}

impl MotionEntry {
    pub const NAME: &'static str = "MotionEvent";

    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Pointer list rendered as `id: (x, y)` pairs in index order
    pub fn describe_pointers(&self) -> String {
        self.pointers
            .iter()
            .map(|pointer| {
                format!(
                    "{}: ({:.1}, {:.1})",
                    pointer.properties.id,
                    pointer.coords.x(),
                    pointer.coords.y()
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn describe(&self, header: &EntryHeader) -> String {
        format!(
            "MotionEvent(deviceId={}, eventTime={}, source={}, displayId={}, action={}, \
             actionButton=0x{:08x}, flags=0x{:08x}, metaState=0x{:08x}, buttonState=0x{:08x}, \
             classification={}, edgeFlags=0x{:08x}, xPrecision={:.1}, yPrecision={:.1}, \
             xCursorPosition={:.1}, yCursorPosition={:.1}, pointers=[{}]), policyFlags=0x{:08x}",
            self.device_id,
            header.event_time,
            self.source,
            self.display_id,
            self.action,
            self.action_button,
            self.flags.bits(),
            self.meta_state,
            self.button_state,
            self.classification,
            self.edge_flags,
            self.x_precision,
            self.y_precision,
            self.x_cursor_position,
            self.y_cursor_position,
            self.describe_pointers(),
            header.policy_flags.bits()
        )
    }
}
