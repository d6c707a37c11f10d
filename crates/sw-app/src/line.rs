//! The line aggregate.

use sw_core::LineId;
use sw_line::SectionChain;

/// A named, colored line together with its section chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub chain: SectionChain,
    pub created_at: String,
    pub modified_at: String,
}

impl Line {
    /// A line with no sections yet.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = sw_store::timestamp_now();
        Self {
            id,
            name: name.into(),
            color: color.into(),
            chain: SectionChain::new(id),
            created_at: now.clone(),
            modified_at: now,
        }
    }

    /// Replace name and color. Sections are untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.modified_at = sw_store::timestamp_now();
    }
}
