//! Input sources
//!
//! A source is a composite of a class (low byte) and a device identity. Class
//! bits decide how coordinates are interpreted, which in turn picks the
//! transform rule used for raw coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Source(pub u32);

impl Source {
    pub const CLASS_MASK: u32 = 0x0000_00ff;
    pub const CLASS_NONE: u32 = 0x0000_0000;
    pub const CLASS_BUTTON: u32 = 0x0000_0001;
    pub const CLASS_POINTER: u32 = 0x0000_0002;
    pub const CLASS_NAVIGATION: u32 = 0x0000_0004;
    pub const CLASS_POSITION: u32 = 0x0000_0008;
    pub const CLASS_JOYSTICK: u32 = 0x0000_0010;

    pub const UNKNOWN: Source = Source(0x0000_0000);
    pub const KEYBOARD: Source = Source(0x0000_0100 | Self::CLASS_BUTTON);
    pub const DPAD: Source = Source(0x0000_0200 | Self::CLASS_BUTTON);
    pub const GAMEPAD: Source = Source(0x0000_0400 | Self::CLASS_BUTTON);
    pub const TOUCHSCREEN: Source = Source(0x0000_1000 | Self::CLASS_POINTER);
    pub const MOUSE: Source = Source(0x0000_2000 | Self::CLASS_POINTER);
    pub const STYLUS: Source = Source(0x0000_4000 | Self::CLASS_POINTER);
    pub const BLUETOOTH_STYLUS: Source = Source(0x0000_8000 | Self::STYLUS.0);
    pub const TRACKBALL: Source = Source(0x0001_0000 | Self::CLASS_NAVIGATION);
    pub const MOUSE_RELATIVE: Source = Source(0x0002_0000 | Self::CLASS_NAVIGATION);
    pub const TOUCHPAD: Source = Source(0x0010_0000 | Self::CLASS_POSITION);
    pub const TOUCH_NAVIGATION: Source = Source(0x0020_0000 | Self::CLASS_NONE);
    pub const ROTARY_ENCODER: Source = Source(0x0040_0000 | Self::CLASS_NONE);
    pub const JOYSTICK: Source = Source(0x0100_0000 | Self::CLASS_JOYSTICK);
    pub const HDMI: Source = Source(0x0200_0000 | Self::CLASS_BUTTON);
    pub const SENSOR: Source = Source(0x0400_0000 | Self::CLASS_NONE);

    /// Named device sources, most specific first so that compound sources
    /// (bluetooth stylus) are matched before their components.
    const NAMED: &'static [(Source, &'static str)] = &[
        (Source::KEYBOARD, "KEYBOARD"),
        (Source::DPAD, "DPAD"),
        (Source::GAMEPAD, "GAMEPAD"),
        (Source::TOUCHSCREEN, "TOUCHSCREEN"),
        (Source::MOUSE, "MOUSE"),
        (Source::BLUETOOTH_STYLUS, "BLUETOOTH_STYLUS"),
        (Source::STYLUS, "STYLUS"),
        (Source::TRACKBALL, "TRACKBALL"),
        (Source::MOUSE_RELATIVE, "MOUSE_RELATIVE"),
        (Source::TOUCHPAD, "TOUCHPAD"),
        (Source::TOUCH_NAVIGATION, "TOUCH_NAVIGATION"),
        (Source::ROTARY_ENCODER, "ROTARY_ENCODER"),
        (Source::JOYSTICK, "JOYSTICK"),
        (Source::HDMI, "HDMI"),
        (Source::SENSOR, "SENSOR"),
    ];

    /// True when every bit of `test` is present in this source
    pub fn is_from_source(&self, test: Source) -> bool {
        (self.0 & test.0) == test.0
    }

    pub fn has_class(&self, class: u32) -> bool {
        (self.0 & class) == class
    }

    pub fn class(&self) -> u32 {
        self.0 & Self::CLASS_MASK
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = Vec::new();
        let mut covered = 0u32;
        for (source, name) in Self::NAMED {
            // A stylus is implied by a bluetooth stylus, don't list it twice
            if self.is_from_source(*source) && (covered & source.0) != source.0 {
                names.push(*name);
                covered |= source.0;
            }
        }

        if names.is_empty() {
            write!(f, "0x{:08x}", self.0)
        } else {
            f.write_str(&names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_from_source_requires_all_bits() {
        assert!(Source::MOUSE.is_from_source(Source::MOUSE));
        assert!(Source::BLUETOOTH_STYLUS.is_from_source(Source::STYLUS));
        assert!(!Source::STYLUS.is_from_source(Source::BLUETOOTH_STYLUS));
        assert!(!Source::MOUSE.is_from_source(Source::TOUCHSCREEN));
    }

    #[test]
    fn test_classes() {
        assert!(Source::TOUCHSCREEN.has_class(Source::CLASS_POINTER));
        assert!(Source::JOYSTICK.has_class(Source::CLASS_JOYSTICK));
        assert_eq!(Source::TOUCHPAD.class(), Source::CLASS_POSITION);
        assert_eq!(Source::KEYBOARD.class(), Source::CLASS_BUTTON);
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::TOUCHSCREEN.to_string(), "TOUCHSCREEN");
        assert_eq!(Source::BLUETOOTH_STYLUS.to_string(), "BLUETOOTH_STYLUS");
        assert_eq!(
            Source(Source::KEYBOARD.0 | Source::DPAD.0).to_string(),
            "KEYBOARD | DPAD"
        );
        assert_eq!(Source::UNKNOWN.to_string(), "0x00000000");
    }
}
