//! sw-line: section chain maintenance for a single subway line.
//!
//! Provides:
//! - `Section`, one directed up/down edge with a positive distance
//! - `SectionChain`, the ordered path of a line's sections with
//!   insertion, splitting and station ordering
//! - structure validation for chains restored from storage
//!
//! # Example
//!
//! ```
//! use sw_core::{Distance, StationId};
//! use sw_line::{Section, SectionChain};
//!
//! let gangnam = StationId::from_raw(1).unwrap();
//! let yangjae = StationId::from_raw(2).unwrap();
//! let cheonggyesan = StationId::from_raw(3).unwrap();
//!
//! let mut chain = SectionChain::new(sw_core::LineId::from_raw(1).unwrap());
//! chain.add(Section::new(gangnam, cheonggyesan, Distance::new(10).unwrap()).unwrap()).unwrap();
//! chain.add(Section::new(gangnam, yangjae, Distance::new(4).unwrap()).unwrap()).unwrap();
//!
//! assert_eq!(chain.ordered_stations(), vec![gangnam, yangjae, cheonggyesan]);
//! ```

pub mod chain;
pub mod error;
pub mod section;
pub(crate) mod validate;

pub use chain::SectionChain;
pub use error::ChainError;
pub use section::Section;
