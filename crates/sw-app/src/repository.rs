//! Line storage seam.

use std::collections::BTreeMap;

use sw_core::LineId;

use crate::error::{AppError, AppResult};
use crate::line::Line;

/// Durable storage of lines and their sections.
///
/// Lookups hand out copies: a caller edits its copy and only a successful
/// `save` makes the edit visible.
pub trait LineRepository {
    /// Store a new, empty line under a fresh id.
    fn insert(&mut self, name: &str, color: &str) -> AppResult<Line>;

    /// Overwrite an existing line. Fails with `NotFound` for an unknown id.
    fn save(&mut self, line: &Line) -> AppResult<()>;

    fn find_by_id(&self, id: LineId) -> Option<Line>;

    /// All lines, ordered by id.
    fn find_all(&self) -> Vec<Line>;

    fn delete_by_id(&mut self, id: LineId) -> AppResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryLineRepository {
    lines: BTreeMap<LineId, Line>,
    next_id: u32,
}

impl InMemoryLineRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put back a line that already has an id, e.g. one read from a file.
    pub fn restore(&mut self, line: Line) {
        self.next_id = self.next_id.max(line.id.raw());
        self.lines.insert(line.id, line);
    }
}

impl LineRepository for InMemoryLineRepository {
    fn insert(&mut self, name: &str, color: &str) -> AppResult<Line> {
        let id = LineId::from_index(self.next_id);
        self.next_id += 1;
        let line = Line::new(id, name, color);
        self.lines.insert(id, line.clone());
        Ok(line)
    }

    fn save(&mut self, line: &Line) -> AppResult<()> {
        match self.lines.get_mut(&line.id) {
            Some(stored) => {
                *stored = line.clone();
                Ok(())
            }
            None => Err(AppError::NotFound {
                what: "Line",
                id: line.id.raw(),
            }),
        }
    }

    fn find_by_id(&self, id: LineId) -> Option<Line> {
        self.lines.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Line> {
        self.lines.values().cloned().collect()
    }

    fn delete_by_id(&mut self, id: LineId) -> AppResult<()> {
        self.lines
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound {
                what: "Line",
                id: id.raw(),
            })
    }
}
