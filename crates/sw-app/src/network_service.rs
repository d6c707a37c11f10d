//! Loading and saving a network document.

use std::path::Path;

use sw_line::{Section, SectionChain};
use sw_store::{LineDef, Network, SectionDef, StationDef};
use tracing::debug;

use crate::error::AppResult;
use crate::line::Line;
use crate::repository::{InMemoryLineRepository, LineRepository};
use crate::station::{InMemoryStationDirectory, Station};

/// A network document rebuilt into in-memory repositories.
#[derive(Debug, Clone, Default)]
pub struct LoadedNetwork {
    pub name: String,
    pub lines: InMemoryLineRepository,
    pub stations: InMemoryStationDirectory,
}

/// Load a network from a YAML file (or JSON, by extension).
pub fn load_network(path: &Path) -> AppResult<LoadedNetwork> {
    let document = sw_store::load(path)?;
    debug!(
        path = %path.display(),
        stations = document.stations.len(),
        lines = document.lines.len(),
        "network loaded"
    );
    LoadedNetwork::from_document(document)
}

/// Save a network to a YAML file (or JSON, by extension).
pub fn save_network(path: &Path, network: &LoadedNetwork) -> AppResult<()> {
    sw_store::save(path, &network.to_document())?;
    debug!(path = %path.display(), "network saved");
    Ok(())
}

impl LoadedNetwork {
    /// Rebuild every line's chain, rejecting lines whose sections do not form one path.
    pub fn from_document(document: Network) -> AppResult<Self> {
        let stations = document
            .stations
            .into_iter()
            .map(|s| Station {
                id: s.id,
                name: s.name,
            })
            .collect();

        let mut lines = InMemoryLineRepository::new();
        for def in document.lines {
            lines.restore(line_from_def(def)?);
        }

        Ok(Self {
            name: document.name,
            lines,
            stations,
        })
    }

    pub fn to_document(&self) -> Network {
        let mut document = Network::new(self.name.clone());
        document.stations = self
            .stations
            .all()
            .map(|s| StationDef {
                id: s.id,
                name: s.name.clone(),
            })
            .collect();
        document.lines = self.lines.find_all().iter().map(line_to_def).collect();
        document
    }
}

fn line_from_def(def: LineDef) -> AppResult<Line> {
    let sections = def
        .sections
        .iter()
        .map(|s| Section::new(s.up_station_id, s.down_station_id, s.distance))
        .collect::<Result<Vec<_>, _>>()?;
    let chain = SectionChain::from_sections(def.id, sections)?;

    Ok(Line {
        id: def.id,
        name: def.name,
        color: def.color,
        chain,
        created_at: def.created_at,
        modified_at: def.modified_at,
    })
}

fn line_to_def(line: &Line) -> LineDef {
    LineDef {
        id: line.id,
        name: line.name.clone(),
        color: line.color.clone(),
        created_at: line.created_at.clone(),
        modified_at: line.modified_at.clone(),
        sections: line
            .chain
            .iter()
            .map(|s| SectionDef {
                up_station_id: s.up_station(),
                down_station_id: s.down_station(),
                distance: s.distance(),
            })
            .collect(),
    }
}
