//! Chain-specific error types.

use sw_core::{CoreError, Distance, StationId};

/// Reasons a section cannot join a chain, or a restored chain is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Both stations of the new section are already on the line.
    DuplicateSection { up: StationId, down: StationId },

    /// The line has stations but the new section touches none of them.
    DisconnectedSection { up: StationId, down: StationId },

    /// Splitting the existing section would leave it with no distance.
    InvalidDistance {
        existing: Distance,
        requested: Distance,
    },

    /// A section must connect two different stations.
    SameStation { station: StationId },

    /// Two sections leave from (or arrive at) the same station.
    Fork { station: StationId },

    /// Sections that cannot be reached by walking from the up terminus.
    Detached { sections: usize },
}

impl std::fmt::Display for ChainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainError::DuplicateSection { up, down } => {
                write!(
                    f,
                    "Section {} -> {} has already-registered stations",
                    up, down
                )
            }
            ChainError::DisconnectedSection { up, down } => {
                write!(f, "Section {} -> {} has no connectable section", up, down)
            }
            ChainError::InvalidDistance {
                existing,
                requested,
            } => {
                write!(
                    f,
                    "Distance {} must stay shorter than the existing section distance {}",
                    requested, existing
                )
            }
            ChainError::SameStation { station } => {
                write!(f, "Section starts and ends at the same station {}", station)
            }
            ChainError::Fork { station } => {
                write!(f, "Line forks at station {}", station)
            }
            ChainError::Detached { sections } => {
                write!(f, "{} section(s) are not connected to the line", sections)
            }
        }
    }
}

impl std::error::Error for ChainError {}

impl From<ChainError> for CoreError {
    fn from(err: ChainError) -> Self {
        CoreError::Invariant {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rejection() {
        let station = StationId::from_raw(3).unwrap();
        let err = ChainError::DisconnectedSection {
            up: station,
            down: StationId::from_raw(4).unwrap(),
        };
        assert_eq!(err.to_string(), "Section 3 -> 4 has no connectable section");

        let err = ChainError::InvalidDistance {
            existing: Distance::new(10).unwrap(),
            requested: Distance::new(12).unwrap(),
        };
        assert!(err.to_string().contains("shorter than the existing section"));
    }

    #[test]
    fn converts_into_core_invariant() {
        let err: CoreError = ChainError::Detached { sections: 2 }.into();
        assert!(matches!(err, CoreError::Invariant { what } if what.contains("2 section(s)")));
    }
}
