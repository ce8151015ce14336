//! Key and motion actions

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAction {
    Down,
    Up,
    Multiple,
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyAction::Down => "DOWN",
            KeyAction::Up => "UP",
            KeyAction::Multiple => "MULTIPLE",
        };
        f.write_str(name)
    }
}

/// Motion action as carried on the wire
///
/// The low byte holds the base action; for `POINTER_DOWN`/`POINTER_UP` the
/// second byte holds the index of the pointer that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotionAction(pub i32);

impl MotionAction {
    pub const ACTION_MASK: i32 = 0xff;
    pub const POINTER_INDEX_MASK: i32 = 0xff00;
    pub const POINTER_INDEX_SHIFT: i32 = 8;

    pub const DOWN: MotionAction = MotionAction(0);
    pub const UP: MotionAction = MotionAction(1);
    pub const MOVE: MotionAction = MotionAction(2);
    pub const CANCEL: MotionAction = MotionAction(3);
    pub const OUTSIDE: MotionAction = MotionAction(4);
    pub const POINTER_DOWN: MotionAction = MotionAction(5);
    pub const POINTER_UP: MotionAction = MotionAction(6);
    pub const HOVER_MOVE: MotionAction = MotionAction(7);
    pub const SCROLL: MotionAction = MotionAction(8);
    pub const HOVER_ENTER: MotionAction = MotionAction(9);
    pub const HOVER_EXIT: MotionAction = MotionAction(10);
    pub const BUTTON_PRESS: MotionAction = MotionAction(11);
    pub const BUTTON_RELEASE: MotionAction = MotionAction(12);

    /// Build a `POINTER_DOWN`/`POINTER_UP` style action for a pointer index
    pub fn with_pointer_index(base: MotionAction, index: usize) -> Self {
        let index = (index as i32) << Self::POINTER_INDEX_SHIFT;
        MotionAction((base.0 & Self::ACTION_MASK) | (index & Self::POINTER_INDEX_MASK))
    }

    /// The base action with the pointer index bits cleared
    pub fn masked(&self) -> MotionAction {
        MotionAction(self.0 & Self::ACTION_MASK)
    }

    pub fn pointer_index(&self) -> usize {
        ((self.0 & Self::POINTER_INDEX_MASK) >> Self::POINTER_INDEX_SHIFT) as usize
    }

    fn base_name(&self) -> Option<&'static str> {
        let name = match self.masked() {
            Self::DOWN => "DOWN",
            Self::UP => "UP",
            Self::MOVE => "MOVE",
            Self::CANCEL => "CANCEL",
            Self::OUTSIDE => "OUTSIDE",
            Self::POINTER_DOWN => "POINTER_DOWN",
            Self::POINTER_UP => "POINTER_UP",
            Self::HOVER_MOVE => "HOVER_MOVE",
            Self::SCROLL => "SCROLL",
            Self::HOVER_ENTER => "HOVER_ENTER",
            Self::HOVER_EXIT => "HOVER_EXIT",
            Self::BUTTON_PRESS => "BUTTON_PRESS",
            Self::BUTTON_RELEASE => "BUTTON_RELEASE",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for MotionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self.masked();
        match self.base_name() {
            Some(name) if masked == Self::POINTER_DOWN || masked == Self::POINTER_UP => {
                write!(f, "{}({})", name, self.pointer_index())
            }
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_clears_pointer_index() {
        let action = MotionAction::with_pointer_index(MotionAction::POINTER_DOWN, 2);
        assert_eq!(action.0, 0x0205);
        assert_eq!(action.masked(), MotionAction::POINTER_DOWN);
        assert_eq!(action.pointer_index(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(MotionAction::DOWN.to_string(), "DOWN");
        assert_eq!(
            MotionAction::with_pointer_index(MotionAction::POINTER_UP, 1).to_string(),
            "POINTER_UP(1)"
        );
        assert_eq!(MotionAction(42).to_string(), "42");
        assert_eq!(KeyAction::Multiple.to_string(), "MULTIPLE");
    }
}
