//! System-generated notification entries
//!
//! Except for device resets, these are synthesized by the dispatcher itself
//! and always carry `PolicyFlags::PASS_TO_USER`.

use super::EntryHeader;
use crate::input::{ConnectionToken, DeviceId, LogicalDisplayId, PointerCaptureRequest};
use serde::{Deserialize, Serialize};

/// All state for a device must be reset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceResetEntry {
    pub device_id: DeviceId,
}

impl DeviceResetEntry {
    pub const NAME: &'static str = "DeviceResetEvent";

    pub(crate) fn describe(&self, header: &EntryHeader) -> String {
        format!(
            "DeviceResetEvent(deviceId={}), policyFlags=0x{:08x}",
            self.device_id,
            header.policy_flags.bits()
        )
    }
}

/// A connection gained or lost focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusEntry {
    pub connection_token: ConnectionToken,
    pub has_focus: bool,
    pub reason: String,
}

impl FocusEntry {
    pub const NAME: &'static str = "FocusEvent";

    pub(crate) fn describe(&self) -> String {
        format!("FocusEvent(hasFocus={}, reason={})", self.has_focus, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerCaptureChangedEntry {
    pub request: PointerCaptureRequest,
}

impl PointerCaptureChangedEntry {
    pub const NAME: &'static str = "PointerCaptureChangedEvent";

    pub(crate) fn describe(&self) -> String {
        format!(
            "PointerCaptureChangedEvent(pointerCaptureEnabled={}, seq={})",
            self.request.is_enable(),
            self.request.seq
        )
    }
}

/// Drag-and-drop location update for a connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEntry {
    pub connection_token: ConnectionToken,
    pub is_exiting: bool,
    pub x: f32,
    pub y: f32,
}

impl DragEntry {
    pub const NAME: &'static str = "DragEvent";

    pub(crate) fn describe(&self) -> String {
        format!(
            "DragEvent(isExiting={}, x={:.1}, y={:.1})",
            self.is_exiting, self.x, self.y
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchModeEntry {
    pub in_touch_mode: bool,
    pub display_id: LogicalDisplayId,
}

impl TouchModeEntry {
    pub const NAME: &'static str = "TouchModeEvent";

    pub(crate) fn describe(&self) -> String {
        format!(
            "TouchModeEvent(inTouchMode={}, displayId={})",
            self.in_touch_mode, self.display_id
        )
    }
}
