//! Line management service layer.
//!
//! Sits between a frontend (the CLI, or any request handler) and the
//! section chain core: resolves station ids, loads and stores lines through
//! a repository seam, and turns lines into responses with their stations in
//! travel order.

pub mod error;
pub mod line;
pub mod line_service;
pub mod network_service;
pub mod repository;
pub mod station;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use line::Line;
pub use line_service::{LineRequest, LineResponse, LineService, SectionRequest, StationResponse};
pub use network_service::{LoadedNetwork, load_network, save_network};
pub use repository::{InMemoryLineRepository, LineRepository};
pub use station::{InMemoryStationDirectory, Station, StationDirectory, resolve_stations};
