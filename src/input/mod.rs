//! Input vocabulary shared by entries, verified events and dispatch entries
//!
//! Identifiers, sources, actions, flag sets, pointers and coordinate
//! transforms. Everything here is plain data.

pub mod action;
pub mod flags;
pub mod keycode;
pub mod pointer;
pub mod source;
pub mod transform;
pub mod types;

pub use action::{KeyAction, MotionAction};
pub use flags::{
    InputTargetFlags, KeyFlags, MotionFlags, PolicyFlags, VERIFIED_KEY_EVENT_FLAGS,
    VERIFIED_MOTION_EVENT_FLAGS,
};
pub use keycode::KeyCode;
pub use pointer::{
    MotionAxis, Pointer, PointerCoords, PointerProperties, Pointers, MAX_POINTERS, MAX_POINTER_ID,
};
pub use source::Source;
pub use transform::{Transform, TransformRule};
pub use types::{
    ConnectionToken, DeviceId, EventId, LogicalDisplayId, MotionClassification, Nsecs,
    PointerCaptureRequest, SensorAccuracy, SensorType, ToolType, Uid,
};

/// No meta keys pressed
pub const META_NONE: i32 = 0;

/// Cursor position value meaning "no cursor"
pub const INVALID_CURSOR_POSITION: f32 = f32::NAN;

pub fn is_valid_cursor_position(x: f32, y: f32) -> bool {
    !x.is_nan() && !y.is_nan()
}
