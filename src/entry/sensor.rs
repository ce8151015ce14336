use super::EntryHeader;
use crate::input::{DeviceId, Nsecs, SensorAccuracy, SensorType, Source};
use serde::{Deserialize, Serialize};

/// A batch of sensor samples from one device sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorEntry {
    pub device_id: DeviceId,
    pub source: Source,
    pub sensor_type: SensorType,
    pub accuracy: SensorAccuracy,
    pub accuracy_changed: bool,
    /// Timestamp reported by the sensor hardware
    pub hw_timestamp: Nsecs,
    pub values: Vec<f32>,
}

impl SensorEntry {
    pub const NAME: &'static str = "SensorEvent";

    pub(crate) fn describe(&self, header: &EntryHeader) -> String {
        let values = self
            .values
            .iter()
            .map(|value| format!("({:.3})", value))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "SensorEvent(deviceId={}, source={}, sensorType={}, accuracy={}, \
             accuracyChanged={}, hwTimestamp={}, values=[{}]), policyFlags=0x{:08x}",
            self.device_id,
            self.source,
            self.sensor_type,
            self.accuracy,
            self.accuracy_changed,
            self.hw_timestamp,
            values,
            header.policy_flags.bits()
        )
    }
}
