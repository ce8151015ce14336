//! Flag sets carried by entries and dispatch targets
//!
//! Key and motion flags keep unknown bits (`from_bits_retain`) so that a
//! producer's bits survive untouched until they are explicitly masked.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Flags set by the input policy describing how an event is treated
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct PolicyFlags: u32 {
        const WAKE = 0x0000_0001;
        const VIRTUAL = 0x0000_0002;
        const FUNCTION = 0x0000_0004;
        const GESTURE = 0x0000_0008;
        const INJECTED = 0x0100_0000;
        const TRUSTED = 0x0200_0000;
        const FILTERED = 0x0400_0000;
        const DISABLE_KEY_REPEAT = 0x0800_0000;
        const INTERACTIVE = 0x2000_0000;
        /// Deliver to the focused application
        const PASS_TO_USER = 0x4000_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct KeyFlags: u32 {
        const WOKE_HERE = 0x0000_0001;
        const SOFT_KEYBOARD = 0x0000_0002;
        const KEEP_TOUCH_MODE = 0x0000_0004;
        const FROM_SYSTEM = 0x0000_0008;
        const EDITOR_ACTION = 0x0000_0010;
        const CANCELED = 0x0000_0020;
        const VIRTUAL_HARD_KEY = 0x0000_0040;
        const LONG_PRESS = 0x0000_0080;
        const CANCELED_LONG_PRESS = 0x0000_0100;
        const TRACKING = 0x0000_0200;
        const FALLBACK = 0x0000_0400;
        const PREDISPATCH = 0x2000_0000;
        const START_TRACKING = 0x4000_0000;
        const TAINTED = 0x8000_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MotionFlags: u32 {
        const WINDOW_IS_OBSCURED = 0x0000_0001;
        const WINDOW_IS_PARTIALLY_OBSCURED = 0x0000_0002;
        const HOVER_EXIT_PENDING = 0x0000_0004;
        const IS_GENERATED_GESTURE = 0x0000_0008;
        const CANCELED = 0x0000_0020;
        const NO_FOCUS_CHANGE = 0x0000_0040;
        const IS_ACCESSIBILITY_EVENT = 0x0000_0800;
        const TAINTED = 0x8000_0000;
    }
}

/// Key flags that are part of a verified key event. Every other bit is
/// stripped before signing.
pub const VERIFIED_KEY_EVENT_FLAGS: KeyFlags = KeyFlags::CANCELED;

/// Motion flags that are part of a verified motion event. Every other bit is
/// stripped before signing.
pub const VERIFIED_MOTION_EVENT_FLAGS: MotionFlags = MotionFlags::WINDOW_IS_OBSCURED
    .union(MotionFlags::WINDOW_IS_PARTIALLY_OBSCURED)
    .union(MotionFlags::IS_ACCESSIBILITY_EVENT);

bitflags! {
    /// Flags resolved for one dispatch target
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct InputTargetFlags: u32 {
        const FOREGROUND = 1 << 0;
        const WINDOW_IS_OBSCURED = 1 << 1;
        const SPLIT = 1 << 2;
        const ZERO_COORDS = 1 << 3;
        const DISPATCH_AS_OUTSIDE = 1 << 4;
        const DISPATCH_AS_HOVER_ENTER = 1 << 5;
        const DISPATCH_AS_HOVER_EXIT = 1 << 6;
        const WINDOW_IS_PARTIALLY_OBSCURED = 1 << 7;
        const DISPATCH_AS_SLIPPERY_EXIT = 1 << 8;
        const DISPATCH_AS_SLIPPERY_ENTER = 1 << 9;
    }
}

impl fmt::Display for InputTargetFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0x0");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        f.write_str(&names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bits_are_retained() {
        let flags = KeyFlags::from_bits_retain(0x0100_0020);
        assert!(flags.contains(KeyFlags::CANCELED));
        assert_eq!(flags.bits(), 0x0100_0020);
    }

    #[test]
    fn test_verified_masks() {
        assert_eq!(VERIFIED_KEY_EVENT_FLAGS.bits(), 0x20);
        assert_eq!(VERIFIED_MOTION_EVENT_FLAGS.bits(), 0x803);
    }

    #[test]
    fn test_target_flags_display() {
        assert_eq!(InputTargetFlags::empty().to_string(), "0x0");
        assert_eq!(
            (InputTargetFlags::FOREGROUND | InputTargetFlags::SPLIT).to_string(),
            "FOREGROUND | SPLIT"
        );
    }
}
