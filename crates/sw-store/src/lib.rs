//! sw-store: network document format for lines, stations and sections.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_network};

use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding of a network document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    fn parse(self, content: &str) -> StoreResult<Network> {
        Ok(match self {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        })
    }

    fn render(self, network: &Network) -> StoreResult<String> {
        Ok(match self {
            Format::Yaml => serde_yaml::to_string(network)?,
            Format::Json => serde_json::to_string_pretty(network)?,
        })
    }
}

/// Read, migrate and validate a network. The format follows the extension.
pub fn load(path: &Path) -> StoreResult<Network> {
    let content = std::fs::read_to_string(path)?;
    let network = Format::from_path(path).parse(&content)?;
    let network = migrate_to_latest(network)?;
    validate_network(&network)?;
    Ok(network)
}

/// Validate and write a network. An invalid network leaves the file untouched.
pub fn save(path: &Path, network: &Network) -> StoreResult<()> {
    validate_network(network)?;
    let content = Format::from_path(path).render(network)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Current time as an RFC 3339 string, the format of the audit columns.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("net.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("net.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("net.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("net")), Format::Yaml);
    }

    #[test]
    fn formats_parse_what_they_render() {
        let network = Network::new("Seoul");
        for format in [Format::Yaml, Format::Json] {
            let text = format.render(&network).unwrap();
            assert_eq!(format.parse(&text).unwrap(), network);
        }
    }

    #[test]
    fn json_is_not_read_as_yaml_by_mistake() {
        assert!(Format::Json.parse("version: 1\nname: Seoul\n").is_err());
    }
}
