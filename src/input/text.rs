//! Text fact files.

use std::error::Error;
use std::path::Path;

/// Read a fact file, one fact per line. Blank lines are dropped.
///
/// Lines are not validated here; malformed facts are skipped when folded into
/// a [`SummaryIndex`](crate::processing::SummaryIndex).
pub fn read_text_facts(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Fact file does not exist: {}", path.display()).into());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading fact file {}: {e}", path.display()))?;
    let lines: Vec<String> = content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(String::from)
        .collect();
    log::info!("Read {} fact line(s) from {}", lines.len(), path.display());
    Ok(lines)
}
