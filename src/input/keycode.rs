//! Key codes and their labels

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const UNKNOWN: KeyCode = KeyCode(0);
    pub const HOME: KeyCode = KeyCode(3);
    pub const BACK: KeyCode = KeyCode(4);
    pub const DPAD_UP: KeyCode = KeyCode(19);
    pub const DPAD_DOWN: KeyCode = KeyCode(20);
    pub const DPAD_LEFT: KeyCode = KeyCode(21);
    pub const DPAD_RIGHT: KeyCode = KeyCode(22);
    pub const DPAD_CENTER: KeyCode = KeyCode(23);
    pub const VOLUME_UP: KeyCode = KeyCode(24);
    pub const VOLUME_DOWN: KeyCode = KeyCode(25);
    pub const POWER: KeyCode = KeyCode(26);
    pub const A: KeyCode = KeyCode(29);
    pub const Z: KeyCode = KeyCode(54);
    pub const TAB: KeyCode = KeyCode(61);
    pub const SPACE: KeyCode = KeyCode(62);
    pub const ENTER: KeyCode = KeyCode(66);
    pub const DEL: KeyCode = KeyCode(67);
    pub const ESCAPE: KeyCode = KeyCode(111);

    const LABELS: &'static [(i32, &'static str)] = &[
        (0, "UNKNOWN"),
        (1, "SOFT_LEFT"),
        (2, "SOFT_RIGHT"),
        (3, "HOME"),
        (4, "BACK"),
        (5, "CALL"),
        (6, "ENDCALL"),
        (7, "0"),
        (8, "1"),
        (9, "2"),
        (10, "3"),
        (11, "4"),
        (12, "5"),
        (13, "6"),
        (14, "7"),
        (15, "8"),
        (16, "9"),
        (17, "STAR"),
        (18, "POUND"),
        (19, "DPAD_UP"),
        (20, "DPAD_DOWN"),
        (21, "DPAD_LEFT"),
        (22, "DPAD_RIGHT"),
        (23, "DPAD_CENTER"),
        (24, "VOLUME_UP"),
        (25, "VOLUME_DOWN"),
        (26, "POWER"),
        (27, "CAMERA"),
        (28, "CLEAR"),
        (29, "A"),
        (30, "B"),
        (31, "C"),
        (32, "D"),
        (33, "E"),
        (34, "F"),
        (35, "G"),
        (36, "H"),
        (37, "I"),
        (38, "J"),
        (39, "K"),
        (40, "L"),
        (41, "M"),
        (42, "N"),
        (43, "O"),
        (44, "P"),
        (45, "Q"),
        (46, "R"),
        (47, "S"),
        (48, "T"),
        (49, "U"),
        (50, "V"),
        (51, "W"),
        (52, "X"),
        (53, "Y"),
        (54, "Z"),
        (55, "COMMA"),
        (56, "PERIOD"),
        (57, "ALT_LEFT"),
        (58, "ALT_RIGHT"),
        (59, "SHIFT_LEFT"),
        (60, "SHIFT_RIGHT"),
        (61, "TAB"),
        (62, "SPACE"),
        (66, "ENTER"),
        (67, "DEL"),
        (82, "MENU"),
        (84, "SEARCH"),
        (111, "ESCAPE"),
        (112, "FORWARD_DEL"),
        (113, "CTRL_LEFT"),
        (114, "CTRL_RIGHT"),
        (117, "META_LEFT"),
        (118, "META_RIGHT"),
        (131, "F1"),
        (132, "F2"),
        (133, "F3"),
        (134, "F4"),
        (135, "F5"),
        (136, "F6"),
        (137, "F7"),
        (138, "F8"),
        (139, "F9"),
        (140, "F10"),
        (141, "F11"),
        (142, "F12"),
    ];

    /// Symbolic label, or `None` for codes without one
    pub fn label(&self) -> Option<&'static str> {
        Self::LABELS
            .binary_search_by_key(&self.0, |(code, _)| *code)
            .ok()
            .map(|index| Self::LABELS[index].1)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label().unwrap_or("<unknown>"), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_sorted() {
        assert!(KeyCode::LABELS.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(KeyCode::A.label(), Some("A"));
        assert_eq!(KeyCode::ESCAPE.label(), Some("ESCAPE"));
        assert_eq!(KeyCode(9999).label(), None);
        assert_eq!(KeyCode::ENTER.to_string(), "ENTER(66)");
        assert_eq!(KeyCode(9999).to_string(), "<unknown>(9999)");
    }
}
