//! Network document validation.
//!
//! Only checks what the document alone can tell: ids, names and station
//! references. Whether a line's sections form one path is checked when the
//! line is rebuilt as a section chain.

use crate::schema::{LineDef, Network};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: u32, context: String },

    #[error("Duplicate line name: {name}")]
    DuplicateName { name: String },

    #[error("Missing reference: station {id} in {context}")]
    MissingReference { id: u32, context: String },

    #[error("Invalid section in line {line}: station {station} is both up and down")]
    SameStation { line: u32, station: u32 },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network(network: &Network) -> Result<(), ValidationError> {
    if network.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: network.version,
        });
    }

    let mut station_ids = HashSet::new();
    for station in &network.stations {
        if !station_ids.insert(station.id) {
            return Err(ValidationError::DuplicateId {
                id: station.id.raw(),
                context: "stations".to_string(),
            });
        }
    }

    let mut line_ids = HashSet::new();
    let mut line_names = HashSet::new();
    for line in &network.lines {
        if !line_ids.insert(line.id) {
            return Err(ValidationError::DuplicateId {
                id: line.id.raw(),
                context: "lines".to_string(),
            });
        }
        if !line_names.insert(line.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: line.name.clone(),
            });
        }
        validate_line(line, &station_ids)?;
    }

    Ok(())
}

fn validate_line(
    line: &LineDef,
    station_ids: &HashSet<sw_core::StationId>,
) -> Result<(), ValidationError> {
    for section in &line.sections {
        if section.up_station_id == section.down_station_id {
            return Err(ValidationError::SameStation {
                line: line.id.raw(),
                station: section.up_station_id.raw(),
            });
        }
        for id in [section.up_station_id, section.down_station_id] {
            if !station_ids.contains(&id) {
                return Err(ValidationError::MissingReference {
                    id: id.raw(),
                    context: format!("line '{}' sections", line.name),
                });
            }
        }
    }
    Ok(())
}
