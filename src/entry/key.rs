use super::EntryHeader;
use crate::input::{DeviceId, KeyAction, KeyCode, KeyFlags, LogicalDisplayId, Nsecs, Source};
use serde::{Deserialize, Serialize};

/// Key press or release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub device_id: DeviceId,
    pub source: Source,
    pub display_id: LogicalDisplayId,
    pub action: KeyAction,
    pub flags: KeyFlags,
    pub key_code: KeyCode,
    pub scan_code: i32,
    pub meta_state: i32,
    pub repeat_count: i32,
    pub down_time: Nsecs,
}

impl KeyEntry {
    pub const NAME: &'static str = "KeyEvent";

    pub(crate) fn describe(&self, header: &EntryHeader) -> String {
        format!(
            "KeyEvent(deviceId={}, eventTime={}, source={}, displayId={}, action={}, \
             flags=0x{:08x}, keyCode={}, scanCode={}, metaState=0x{:08x}, repeatCount={}), \
             policyFlags=0x{:08x}",
            self.device_id,
            header.event_time,
            self.source,
            self.display_id,
            self.action,
            self.flags.bits(),
            self.key_code,
            self.scan_code,
            self.meta_state,
            self.repeat_count,
            header.policy_flags.bits()
        )
    }
}
