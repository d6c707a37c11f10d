//! Network document schema.

use serde::{Deserialize, Serialize};
use sw_core::{Distance, LineId, StationId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Network {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<StationDef>,
    #[serde(default)]
    pub lines: Vec<LineDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationDef {
    pub id: StationId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDef {
    pub id: LineId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub modified_at: String,
    /// Stored in insertion order; travel order is rebuilt on load.
    #[serde(default)]
    pub sections: Vec<SectionDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionDef {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: Distance,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            stations: Vec::new(),
            lines: Vec::new(),
        }
    }
}
