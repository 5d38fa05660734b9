//! JSON files of discovered names.

use crate::models::DiscoveredName;
use std::error::Error;
use std::path::Path;

/// Parse a JSON array of [`DiscoveredName`], reporting the failing path on error.
pub fn parse_discovered_names(json: &str) -> Result<Vec<DiscoveredName>, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let names: Vec<DiscoveredName> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing names JSON: path={} error={}", e.path(), e))?;
    Ok(names)
}

/// Read and parse a discovered-names file.
pub fn read_discovered_names(path: &Path) -> Result<Vec<DiscoveredName>, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading names file {}: {e}", path.display()))?;
    let names = parse_discovered_names(&json)?;
    log::info!("Read {} discovered name(s) from {}", names.len(), path.display());
    Ok(names)
}
