use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ZoneStatus;

/// A monitored field zone with its most recent sensor snapshot.
///
/// Sensor fields are optional: a zone whose probes have never reported keeps
/// them at `None`. `last_updated` moves forward on every zone update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub status: ZoneStatus,
    /// Soil moisture, percent.
    pub soil_moisture: Option<i64>,
    /// Air temperature, degrees Celsius.
    pub temperature: Option<i64>,
    /// Relative humidity, percent.
    pub humidity: Option<i64>,
    pub last_updated: DateTime<Utc>,
}
