//! sw-core: stable foundation for the subway line model.
//!
//! Contains:
//! - ids (compact IDs for stations, lines and sections)
//! - distance (strictly positive section distance)
//! - error (shared error types)

pub mod distance;
pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use distance::Distance;
pub use error::{CoreError, CoreResult};
pub use ids::*;
