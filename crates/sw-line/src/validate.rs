//! Path derivation and structure checks for section sets.

use std::collections::{HashMap, HashSet};
use sw_core::StationId;

use crate::error::ChainError;
use crate::section::Section;

/// Indices of `sections` in travel order, starting at the up terminus.
///
/// Walks forward through an up-station index until the down terminus. On a
/// malformed set the walk stops early, so the result may be shorter than
/// `sections`; [`validate_path`] reports that case.
pub(crate) fn path_order(sections: &[Section]) -> Vec<usize> {
    let mut by_up: HashMap<StationId, usize> = HashMap::with_capacity(sections.len());
    let mut downs: HashSet<StationId> = HashSet::with_capacity(sections.len());
    for (i, section) in sections.iter().enumerate() {
        by_up.entry(section.up_station()).or_insert(i);
        downs.insert(section.down_station());
    }

    let Some(head) = sections
        .iter()
        .position(|s| !downs.contains(&s.up_station()))
    else {
        return Vec::new();
    };

    let mut order = Vec::with_capacity(sections.len());
    let mut current = Some(head);
    while let Some(i) = current {
        if order.len() == sections.len() {
            break;
        }
        order.push(i);
        current = by_up.get(&sections[i].down_station()).copied();
    }
    order
}

/// Check that `sections` form one simple path.
pub(crate) fn validate_path(sections: &[Section]) -> Result<(), ChainError> {
    let mut ups = HashSet::with_capacity(sections.len());
    let mut downs = HashSet::with_capacity(sections.len());
    for section in sections {
        if !ups.insert(section.up_station()) {
            return Err(ChainError::Fork {
                station: section.up_station(),
            });
        }
        if !downs.insert(section.down_station()) {
            return Err(ChainError::Fork {
                station: section.down_station(),
            });
        }
    }

    let reached = path_order(sections).len();
    if reached != sections.len() {
        return Err(ChainError::Detached {
            sections: sections.len() - reached,
        });
    }

    Ok(())
}
