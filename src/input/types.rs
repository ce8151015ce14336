use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Monotonic timestamp in nanoseconds
pub type Nsecs = i64;

/// Process-unique event identifier, assigned by the producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub i32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Input device identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(pub i32);

impl DeviceId {
    /// Device id used for events that do not come from a physical device
    pub const VIRTUAL_KEYBOARD: DeviceId = DeviceId(-1);
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical display an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalDisplayId(pub i32);

impl LogicalDisplayId {
    pub const DEFAULT: LogicalDisplayId = LogicalDisplayId(0);
    pub const INVALID: LogicalDisplayId = LogicalDisplayId(-1);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl Default for LogicalDisplayId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LogicalDisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "INVALID")
        }
    }
}

/// Uid of the application that owns a dispatch target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uid(pub u32);

impl Uid {
    pub const INVALID: Uid = Uid(u32::MAX);
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identity of a receiving connection (window channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionToken(Uuid);

impl ConnectionToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConnectionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tool used by a pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolType {
    #[default]
    Unknown,
    Finger,
    Stylus,
    Mouse,
    Eraser,
    Palm,
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolType::Unknown => "UNKNOWN",
            ToolType::Finger => "FINGER",
            ToolType::Stylus => "STYLUS",
            ToolType::Mouse => "MOUSE",
            ToolType::Eraser => "ERASER",
            ToolType::Palm => "PALM",
        };
        f.write_str(name)
    }
}

/// Classification attached to a motion gesture by upstream processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MotionClassification {
    #[default]
    None,
    AmbiguousGesture,
    DeepPress,
    TwoFingerSwipe,
    MultiFingerSwipe,
    Pinch,
}

impl fmt::Display for MotionClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotionClassification::None => "NONE",
            MotionClassification::AmbiguousGesture => "AMBIGUOUS_GESTURE",
            MotionClassification::DeepPress => "DEEP_PRESS",
            MotionClassification::TwoFingerSwipe => "TWO_FINGER_SWIPE",
            MotionClassification::MultiFingerSwipe => "MULTI_FINGER_SWIPE",
            MotionClassification::Pinch => "PINCH",
        };
        f.write_str(name)
    }
}

/// Kind of sensor that produced a sensor event
///
/// The number and meaning of the sample values depend on the sensor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    Accelerometer,
    MagneticField,
    Orientation,
    Gyroscope,
    Light,
    Pressure,
    Temperature,
    Proximity,
    Gravity,
    LinearAcceleration,
    RotationVector,
    RelativeHumidity,
    AmbientTemperature,
    MagneticFieldUncalibrated,
    GameRotationVector,
    GyroscopeUncalibrated,
    SignificantMotion,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorType::Accelerometer => "ACCELEROMETER",
            SensorType::MagneticField => "MAGNETIC_FIELD",
            SensorType::Orientation => "ORIENTATION",
            SensorType::Gyroscope => "GYROSCOPE",
            SensorType::Light => "LIGHT",
            SensorType::Pressure => "PRESSURE",
            SensorType::Temperature => "TEMPERATURE",
            SensorType::Proximity => "PROXIMITY",
            SensorType::Gravity => "GRAVITY",
            SensorType::LinearAcceleration => "LINEAR_ACCELERATION",
            SensorType::RotationVector => "ROTATION_VECTOR",
            SensorType::RelativeHumidity => "RELATIVE_HUMIDITY",
            SensorType::AmbientTemperature => "AMBIENT_TEMPERATURE",
            SensorType::MagneticFieldUncalibrated => "MAGNETIC_FIELD_UNCALIBRATED",
            SensorType::GameRotationVector => "GAME_ROTATION_VECTOR",
            SensorType::GyroscopeUncalibrated => "GYROSCOPE_UNCALIBRATED",
            SensorType::SignificantMotion => "SIGNIFICANT_MOTION",
        };
        f.write_str(name)
    }
}

/// Reported accuracy of a sensor sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SensorAccuracy {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for SensorAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorAccuracy::None => "NONE",
            SensorAccuracy::Low => "LOW",
            SensorAccuracy::Medium => "MEDIUM",
            SensorAccuracy::High => "HIGH",
        };
        f.write_str(name)
    }
}

/// Request to enable or disable pointer capture for a window
///
/// Capture is enabled when a window is present. `seq` orders requests so that
/// stale notifications can be dropped by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerCaptureRequest {
    pub window: Option<ConnectionToken>,
    pub seq: u32,
}

impl PointerCaptureRequest {
    pub fn enable(window: ConnectionToken, seq: u32) -> Self {
        Self {
            window: Some(window),
            seq,
        }
    }

    pub fn disable(seq: u32) -> Self {
        Self { window: None, seq }
    }

    pub fn is_enable(&self) -> bool {
        self.window.is_some()
    }
}
