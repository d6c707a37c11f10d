//! Station records and id resolution.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use sw_core::StationId;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

/// Lookup of station records owned outside the line model.
pub trait StationDirectory {
    /// Records for the ids that exist; unknown ids are skipped.
    fn find_stations_by_ids(&self, ids: &[StationId]) -> Vec<Station>;
}

/// Resolve every id in `ids`, failing with `NotFound` on the first unknown one.
pub fn resolve_stations<S: StationDirectory + ?Sized>(
    directory: &S,
    ids: &[StationId],
) -> AppResult<HashMap<StationId, Station>> {
    let found: HashMap<StationId, Station> = directory
        .find_stations_by_ids(ids)
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    if let Some(missing) = ids.iter().find(|id| !found.contains_key(*id)) {
        return Err(AppError::NotFound {
            what: "Station",
            id: missing.raw(),
        });
    }
    Ok(found)
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStationDirectory {
    stations: BTreeMap<StationId, Station>,
}

impl InMemoryStationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, station: Station) {
        self.stations.insert(station.id, station);
    }

    /// All stations, ordered by id.
    pub fn all(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}

impl FromIterator<Station> for InMemoryStationDirectory {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        let mut directory = Self::new();
        for station in iter {
            directory.insert(station);
        }
        directory
    }
}

impl StationDirectory for InMemoryStationDirectory {
    fn find_stations_by_ids(&self, ids: &[StationId]) -> Vec<Station> {
        ids.iter()
            .filter_map(|id| self.stations.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> InMemoryStationDirectory {
        ["강남역", "양재역"]
            .iter()
            .enumerate()
            .map(|(i, name)| Station {
                id: StationId::from_index(i as u32),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn resolves_known_ids() {
        let ids = [StationId::from_raw(1).unwrap(), StationId::from_raw(2).unwrap()];
        let stations = resolve_stations(&directory(), &ids).unwrap();
        assert_eq!(stations[&ids[1]].name, "양재역");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let ids = [StationId::from_raw(1).unwrap(), StationId::from_raw(9).unwrap()];
        let err = resolve_stations(&directory(), &ids).unwrap_err();
        assert!(matches!(err, AppError::NotFound { what: "Station", id: 9 }));
    }
}
