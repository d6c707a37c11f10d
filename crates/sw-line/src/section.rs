//! A single up/down edge of a line.

use sw_core::{Distance, LineId, StationId};

use crate::error::ChainError;

/// One directed edge between an up station and a down station.
///
/// The two stations always differ and the distance is always at least 1.
/// `line` is only a grouping key for storage; ordering never looks at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    up_station: StationId,
    down_station: StationId,
    distance: Distance,
    line: Option<LineId>,
}

impl Section {
    /// Create a detached section. Fails if both ends are the same station.
    pub fn new(
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<Self, ChainError> {
        if up_station == down_station {
            return Err(ChainError::SameStation {
                station: up_station,
            });
        }
        Ok(Self {
            up_station,
            down_station,
            distance,
            line: None,
        })
    }

    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// The owning line, once the section has been added to a chain.
    pub fn line(&self) -> Option<LineId> {
        self.line
    }

    /// `[up, down]`, in travel order.
    pub fn stations(&self) -> [StationId; 2] {
        [self.up_station, self.down_station]
    }

    pub fn is_same_up_station(&self, other: &Section) -> bool {
        self.up_station == other.up_station
    }

    pub fn is_same_down_station(&self, other: &Section) -> bool {
        self.down_station == other.down_station
    }

    /// Make room for `inserted`, which leaves from our up station.
    ///
    /// Our up station moves forward to `inserted`'s down station and our
    /// distance shrinks by `inserted`'s distance. Leaves `self` untouched on
    /// error.
    pub fn update_up_station(&mut self, inserted: &Section) -> Result<(), ChainError> {
        let distance = self.shrunk_by(inserted)?;
        self.up_station = inserted.down_station;
        self.distance = distance;
        Ok(())
    }

    /// Make room for `inserted`, which arrives at our down station.
    ///
    /// Mirror of [`Section::update_up_station`].
    pub fn update_down_station(&mut self, inserted: &Section) -> Result<(), ChainError> {
        let distance = self.shrunk_by(inserted)?;
        self.down_station = inserted.up_station;
        self.distance = distance;
        Ok(())
    }

    pub(crate) fn attach(&mut self, line: LineId) {
        self.line = Some(line);
    }

    fn shrunk_by(&self, inserted: &Section) -> Result<Distance, ChainError> {
        self.distance
            .checked_sub(inserted.distance)
            .ok_or(ChainError::InvalidDistance {
                existing: self.distance,
                requested: inserted.distance,
            })
    }
}
