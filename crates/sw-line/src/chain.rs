//! The ordered section chain of one line.

use sw_core::{LineId, SectionId, StationId};
use tracing::debug;

use crate::error::ChainError;
use crate::section::Section;
use crate::validate;

/// All sections of one line, kept as a single simple path.
///
/// Sections are stored in insertion order and addressed by `SectionId`
/// (their position). Travel order is never stored; it is derived on every
/// read by walking from the up terminus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionChain {
    line: LineId,
    sections: Vec<Section>,
}

impl SectionChain {
    /// Create an empty chain for `line`.
    pub fn new(line: LineId) -> Self {
        Self {
            line,
            sections: Vec::new(),
        }
    }

    /// Rebuild a chain from stored sections, checking that they form one path.
    pub fn from_sections(line: LineId, sections: Vec<Section>) -> Result<Self, ChainError> {
        validate::validate_path(&sections)?;
        let mut chain = Self { line, sections };
        for section in &mut chain.sections {
            section.attach(line);
        }
        Ok(chain)
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Add `section` to the line, splitting the existing section it lands in.
    ///
    /// A section sharing its up station with an existing one is inserted
    /// right after that station; one sharing its down station is inserted
    /// right before it. A section attached at a terminus just extends the
    /// line. The up-station match is tried first.
    ///
    /// On error the chain is left exactly as it was.
    pub fn add(&mut self, mut section: Section) -> Result<SectionId, ChainError> {
        let stations = self.ordered_stations();
        let has_up = stations.contains(&section.up_station());
        let has_down = stations.contains(&section.down_station());

        if has_up && has_down {
            return Err(ChainError::DuplicateSection {
                up: section.up_station(),
                down: section.down_station(),
            });
        }
        if !stations.is_empty() && !has_up && !has_down {
            return Err(ChainError::DisconnectedSection {
                up: section.up_station(),
                down: section.down_station(),
            });
        }

        if has_up {
            self.split_from_up(&section)?;
        } else if has_down {
            self.split_from_down(&section)?;
        }

        section.attach(self.line);
        let id = self.next_id();
        debug!(
            line = %self.line,
            section = %id,
            up = %section.up_station(),
            down = %section.down_station(),
            distance = %section.distance(),
            "section added"
        );
        self.sections.push(section);
        Ok(id)
    }

    /// Id of the next appended section: its position in storage.
    ///
    /// Positions past `u32::MAX` share the last id; a line never gets near it.
    fn next_id(&self) -> SectionId {
        SectionId::from_index(u32::try_from(self.sections.len()).unwrap_or(u32::MAX))
    }

    fn split_from_up(&mut self, inserted: &Section) -> Result<(), ChainError> {
        let Some(existing) = self
            .sections
            .iter_mut()
            .find(|s| s.is_same_up_station(inserted))
        else {
            // Up station is the down terminus: plain extension.
            return Ok(());
        };
        existing.update_up_station(inserted)?;
        debug!(
            line = %self.line,
            up = %existing.up_station(),
            down = %existing.down_station(),
            distance = %existing.distance(),
            "split section from up station"
        );
        Ok(())
    }

    fn split_from_down(&mut self, inserted: &Section) -> Result<(), ChainError> {
        let Some(existing) = self
            .sections
            .iter_mut()
            .find(|s| s.is_same_down_station(inserted))
        else {
            // Down station is the up terminus: plain extension.
            return Ok(());
        };
        existing.update_down_station(inserted)?;
        debug!(
            line = %self.line,
            up = %existing.up_station(),
            down = %existing.down_station(),
            distance = %existing.distance(),
            "split section from down station"
        );
        Ok(())
    }

    /// Stations in travel order, each exactly once. Empty for an empty chain.
    pub fn ordered_stations(&self) -> Vec<StationId> {
        let order = validate::path_order(&self.sections);
        let mut stations = Vec::with_capacity(order.len() + 1);
        if let Some(&first) = order.first() {
            stations.push(self.sections[first].up_station());
        }
        stations.extend(order.iter().map(|&i| self.sections[i].down_station()));
        stations
    }

    /// Copy of the sections in travel order.
    pub fn ordered_sections(&self) -> Vec<Section> {
        validate::path_order(&self.sections)
            .into_iter()
            .map(|i| self.sections[i].clone())
            .collect()
    }

    /// Copy of the sections in insertion order.
    pub fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }

    /// Iterate over the sections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Get a section by ID (returns None if ID out of bounds).
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(id.index() as usize)
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections
            .iter()
            .any(|s| s.up_station() == station || s.down_station() == station)
    }

    /// `(up terminus, down terminus)`, or `None` for an empty chain.
    pub fn termini(&self) -> Option<(StationId, StationId)> {
        let stations = self.ordered_stations();
        Some((*stations.first()?, *stations.last()?))
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_core::Distance;

    const GANGNAM: u32 = 1;
    const YANGJAE: u32 = 2;
    const CITIZENS_FOREST: u32 = 3;
    const CHEONGGYESAN: u32 = 4;

    fn station(raw: u32) -> StationId {
        StationId::from_raw(raw).unwrap()
    }

    fn section(up: u32, down: u32, distance: u32) -> Section {
        Section::new(station(up), station(down), Distance::new(distance).unwrap()).unwrap()
    }

    fn stations(raws: &[u32]) -> Vec<StationId> {
        raws.iter().copied().map(station).collect()
    }

    fn edges(chain: &SectionChain) -> Vec<(u32, u32, u32)> {
        chain
            .ordered_sections()
            .iter()
            .map(|s| (s.up_station().raw(), s.down_station().raw(), s.distance().get()))
            .collect()
    }

    fn base_chain() -> SectionChain {
        let mut chain = SectionChain::new(LineId::from_raw(1).unwrap());
        chain.add(section(GANGNAM, CHEONGGYESAN, 10)).unwrap();
        chain
    }

    #[test]
    fn empty_chain_has_no_stations() {
        let chain = SectionChain::new(LineId::from_raw(1).unwrap());
        assert!(chain.is_empty());
        assert!(chain.ordered_stations().is_empty());
        assert_eq!(chain.termini(), None);
        assert_eq!(chain.total_distance(), 0);
    }

    #[test]
    fn first_section_is_accepted() {
        let chain = base_chain();
        assert_eq!(chain.ordered_stations(), stations(&[GANGNAM, CHEONGGYESAN]));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn added_sections_belong_to_the_line() {
        let chain = base_chain();
        let id = SectionId::from_index(0);
        assert_eq!(chain.section(id).unwrap().line(), LineId::from_raw(1));
    }

    #[test]
    fn insert_in_middle_sharing_up_station() {
        let mut chain = base_chain();
        chain.add(section(GANGNAM, YANGJAE, 4)).unwrap();

        assert_eq!(
            edges(&chain),
            vec![(GANGNAM, YANGJAE, 4), (YANGJAE, CHEONGGYESAN, 6)]
        );
        assert_eq!(
            chain.ordered_stations(),
            stations(&[GANGNAM, YANGJAE, CHEONGGYESAN])
        );
    }

    #[test]
    fn insert_in_middle_sharing_down_station() {
        let mut chain = base_chain();
        chain.add(section(YANGJAE, CHEONGGYESAN, 4)).unwrap();

        assert_eq!(
            edges(&chain),
            vec![(GANGNAM, YANGJAE, 6), (YANGJAE, CHEONGGYESAN, 4)]
        );
    }

    #[test]
    fn extend_at_up_terminus() {
        let mut chain = SectionChain::new(LineId::from_raw(1).unwrap());
        chain.add(section(YANGJAE, CHEONGGYESAN, 10)).unwrap();
        chain.add(section(GANGNAM, YANGJAE, 4)).unwrap();

        assert_eq!(
            edges(&chain),
            vec![(GANGNAM, YANGJAE, 4), (YANGJAE, CHEONGGYESAN, 10)]
        );
    }

    #[test]
    fn extend_at_down_terminus() {
        let mut chain = SectionChain::new(LineId::from_raw(1).unwrap());
        chain.add(section(GANGNAM, CITIZENS_FOREST, 10)).unwrap();
        chain.add(section(CITIZENS_FOREST, CHEONGGYESAN, 4)).unwrap();

        assert_eq!(
            chain.ordered_stations(),
            stations(&[GANGNAM, CITIZENS_FOREST, CHEONGGYESAN])
        );
        assert_eq!(chain.total_distance(), 14);
    }

    #[test]
    fn distance_too_large_is_rejected() {
        let mut chain = base_chain();
        let before = chain.clone();

        let err = chain.add(section(GANGNAM, YANGJAE, 10)).unwrap_err();
        assert_eq!(
            err,
            ChainError::InvalidDistance {
                existing: Distance::new(10).unwrap(),
                requested: Distance::new(10).unwrap(),
            }
        );
        assert_eq!(chain, before);
    }

    #[test]
    fn distance_too_large_from_down_side_is_rejected() {
        let mut chain = base_chain();
        let before = chain.clone();

        let err = chain.add(section(YANGJAE, CHEONGGYESAN, 12)).unwrap_err();
        assert!(matches!(err, ChainError::InvalidDistance { .. }));
        assert_eq!(chain, before);
    }

    #[test]
    fn duplicate_section_is_rejected() {
        let mut chain = base_chain();
        let before = chain.clone();

        let err = chain.add(section(GANGNAM, CHEONGGYESAN, 4)).unwrap_err();
        assert!(matches!(err, ChainError::DuplicateSection { .. }));
        let err = chain.add(section(CHEONGGYESAN, GANGNAM, 4)).unwrap_err();
        assert!(matches!(err, ChainError::DuplicateSection { .. }));
        assert_eq!(chain, before);
    }

    #[test]
    fn duplicate_span_over_several_sections_is_rejected() {
        let mut chain = base_chain();
        chain.add(section(GANGNAM, YANGJAE, 4)).unwrap();

        let err = chain.add(section(GANGNAM, CHEONGGYESAN, 2)).unwrap_err();
        assert!(matches!(err, ChainError::DuplicateSection { .. }));
    }

    #[test]
    fn disconnected_section_is_rejected() {
        let mut chain = base_chain();
        let before = chain.clone();

        let err = chain.add(section(YANGJAE, CITIZENS_FOREST, 4)).unwrap_err();
        assert_eq!(
            err,
            ChainError::DisconnectedSection {
                up: station(YANGJAE),
                down: station(CITIZENS_FOREST),
            }
        );
        assert_eq!(chain, before);
    }

    #[test]
    fn ordered_stations_is_repeatable() {
        let mut chain = base_chain();
        chain.add(section(YANGJAE, CHEONGGYESAN, 3)).unwrap();
        assert_eq!(chain.ordered_stations(), chain.ordered_stations());
    }

    #[test]
    fn from_sections_restores_any_storage_order() {
        let line = LineId::from_raw(7).unwrap();
        let chain = SectionChain::from_sections(
            line,
            vec![section(YANGJAE, CHEONGGYESAN, 6), section(GANGNAM, YANGJAE, 4)],
        )
        .unwrap();

        assert_eq!(
            chain.ordered_stations(),
            stations(&[GANGNAM, YANGJAE, CHEONGGYESAN])
        );
        assert_eq!(chain.line(), line);
        assert!(chain.iter().all(|s| s.line() == Some(line)));
        assert_eq!(chain.termini(), Some((station(GANGNAM), station(CHEONGGYESAN))));
    }

    #[test]
    fn from_sections_rejects_a_fork() {
        let err = SectionChain::from_sections(
            LineId::from_raw(1).unwrap(),
            vec![section(GANGNAM, YANGJAE, 4), section(GANGNAM, CHEONGGYESAN, 6)],
        )
        .unwrap_err();
        assert_eq!(err, ChainError::Fork { station: station(GANGNAM) });
    }

    #[test]
    fn add_returns_position_ids() {
        let mut chain = base_chain();
        let after = chain.add(section(GANGNAM, YANGJAE, 4)).unwrap();
        let before = chain.add(section(CITIZENS_FOREST, CHEONGGYESAN, 2)).unwrap();

        assert_eq!(after, SectionId::from_index(1));
        assert_eq!(before, SectionId::from_index(2));
        assert_eq!(chain.section(after).unwrap().stations(), [station(GANGNAM), station(YANGJAE)]);
        assert_eq!(
            chain.section(before).unwrap().stations(),
            [station(CITIZENS_FOREST), station(CHEONGGYESAN)]
        );
        assert!(chain.section(SectionId::from_index(3)).is_none());
    }

    #[test]
    fn contains_station_follows_accepted_sections() {
        let mut chain = base_chain();
        chain.add(section(GANGNAM, YANGJAE, 4)).unwrap();
        assert!(chain.contains_station(station(GANGNAM)));
        assert!(chain.contains_station(station(YANGJAE)));
        assert!(chain.contains_station(station(CHEONGGYESAN)));

        assert!(chain.add(section(CITIZENS_FOREST, 5, 3)).is_err());
        assert!(!chain.contains_station(station(CITIZENS_FOREST)));
        assert!(!chain.contains_station(station(5)));
    }

    #[test]
    fn sections_returns_a_copy() {
        let chain = base_chain();
        let mut copy = chain.sections();
        copy.clear();
        assert_eq!(chain.len(), 1);
    }
}
