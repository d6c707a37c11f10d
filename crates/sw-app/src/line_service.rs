//! Line creation, lookup, update and section registration.

use serde::Serialize;
use sw_core::{Distance, LineId, StationId};
use sw_line::Section;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::line::Line;
use crate::repository::LineRepository;
use crate::station::{StationDirectory, resolve_stations};

/// Input for creating a line together with its first section.
#[derive(Debug, Clone)]
pub struct LineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Input for registering a section on an existing line.
#[derive(Debug, Clone, Copy)]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

/// A line as shown to callers: stations listed in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResponse {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResponse>,
    pub created_at: String,
    pub modified_at: String,
}

pub struct LineService<R, S> {
    lines: R,
    stations: S,
}

impl<R: LineRepository, S: StationDirectory> LineService<R, S> {
    pub fn new(lines: R, stations: S) -> Self {
        Self { lines, stations }
    }

    pub fn into_parts(self) -> (R, S) {
        (self.lines, self.stations)
    }

    /// Create a line and register its first section.
    ///
    /// Nothing is stored if the name is taken or the section is invalid.
    pub fn save_line(&mut self, request: &LineRequest) -> AppResult<LineResponse> {
        self.ensure_unique_name(&request.name, None)?;
        let section = self.build_section(
            request.up_station_id,
            request.down_station_id,
            request.distance,
        )?;

        let mut line = self.lines.insert(&request.name, &request.color)?;
        line.chain.add(section)?;
        self.lines.save(&line)?;

        info!(line = %line.id, name = %line.name, "line created");
        self.to_response(&line)
    }

    /// Register a section on line `line_id`, splitting an existing one if needed.
    pub fn add_section(
        &mut self,
        line_id: LineId,
        request: &SectionRequest,
    ) -> AppResult<LineResponse> {
        let mut line = self.find_by_id(line_id)?;
        let section = self.build_section(
            request.up_station_id,
            request.down_station_id,
            request.distance,
        )?;

        line.chain.add(section).inspect_err(|err| {
            debug!(line = %line_id, error = %err, "section rejected");
        })?;
        line.touch();
        self.lines.save(&line)?;

        info!(
            line = %line_id,
            up = %request.up_station_id,
            down = %request.down_station_id,
            distance = request.distance,
            "section registered"
        );
        self.to_response(&line)
    }

    /// Rename and recolor a line. Its sections are untouched.
    pub fn update_line(&mut self, id: LineId, name: &str, color: &str) -> AppResult<LineResponse> {
        let mut line = self.find_by_id(id)?;
        self.ensure_unique_name(name, Some(id))?;
        line.update(name, color);
        self.lines.save(&line)?;

        info!(line = %id, name = %line.name, "line updated");
        self.to_response(&line)
    }

    pub fn find_all_lines(&self) -> AppResult<Vec<LineResponse>> {
        self.lines
            .find_all()
            .iter()
            .map(|line| self.to_response(line))
            .collect()
    }

    pub fn find_line_by_id(&self, id: LineId) -> AppResult<LineResponse> {
        let line = self.find_by_id(id)?;
        self.to_response(&line)
    }

    pub fn delete_line_by_id(&mut self, id: LineId) -> AppResult<()> {
        self.lines.delete_by_id(id)?;
        info!(line = %id, "line deleted");
        Ok(())
    }

    fn find_by_id(&self, id: LineId) -> AppResult<Line> {
        self.lines.find_by_id(id).ok_or(AppError::NotFound {
            what: "Line",
            id: id.raw(),
        })
    }

    fn ensure_unique_name(&self, name: &str, except: Option<LineId>) -> AppResult<()> {
        let taken = self
            .lines
            .find_all()
            .iter()
            .any(|line| line.name == name && Some(line.id) != except);
        if taken {
            return Err(AppError::DuplicateLine(name.to_string()));
        }
        Ok(())
    }

    fn build_section(
        &self,
        up_station_id: StationId,
        down_station_id: StationId,
        distance: u32,
    ) -> AppResult<Section> {
        let stations = resolve_stations(&self.stations, &[up_station_id, down_station_id])?;
        let distance = Distance::new(distance)?;
        let section = Section::new(
            stations[&up_station_id].id,
            stations[&down_station_id].id,
            distance,
        )?;
        Ok(section)
    }

    fn to_response(&self, line: &Line) -> AppResult<LineResponse> {
        let ordered = line.chain.ordered_stations();
        let stations = resolve_stations(&self.stations, &ordered)?;
        Ok(LineResponse {
            id: line.id,
            name: line.name.clone(),
            color: line.color.clone(),
            stations: ordered
                .iter()
                .map(|id| StationResponse {
                    id: *id,
                    name: stations[id].name.clone(),
                })
                .collect(),
            created_at: line.created_at.clone(),
            modified_at: line.modified_at.clone(),
        })
    }
}
