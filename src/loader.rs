//! CSV loading for `edges.csv`.
//!
//! Rows are deserialized with `csv` + serde, then normalized into
//! [`EdgeRecord`]s: titles and notes trimmed, themes split on `;`,
//! trimmed, lowercased and de-duplicated.

use crate::error::InputError;
use crate::models::EdgeRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Raw row shape. `themes` and `note` may be missing entirely or blank.
#[derive(Debug, Deserialize)]
struct EdgeRow {
    source_title: String,
    source_year: i64,
    target_title: String,
    target_year: i64,
    weight: i64,
    #[serde(default)]
    themes: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

impl EdgeRow {
    fn into_record(self) -> EdgeRecord {
        EdgeRecord {
            source_title: self.source_title.trim().to_string(),
            source_year: self.source_year,
            target_title: self.target_title.trim().to_string(),
            target_year: self.target_year,
            weight: self.weight,
            themes: self.themes.as_deref().map(parse_themes).unwrap_or_default(),
            note: self.note.map(|n| n.trim().to_string()).unwrap_or_default(),
        }
    }
}

// ============================================================================
// Theme Normalization
// ============================================================================

pub fn normalize_theme(theme: &str) -> String {
    theme.trim().to_lowercase()
}

/// Split a `;`-separated themes cell. Empty tokens are dropped and repeats
/// keep their first position.
pub fn parse_themes(cell: &str) -> Vec<String> {
    let mut themes: Vec<String> = Vec::new();
    for token in cell.split(';') {
        let theme = normalize_theme(token);
        if !theme.is_empty() && !themes.contains(&theme) {
            themes.push(theme);
        }
    }
    themes
}

// ============================================================================
// Loading
// ============================================================================

/// Parse edge records from any reader. An empty result is not an error here;
/// see [`load_edges`].
pub fn parse_edges<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut edges = Vec::new();
    for result in rdr.deserialize::<EdgeRow>() {
        let row = result.map_err(|source| InputError::MalformedRow {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        let record = row.into_record();
        if !(1..=3).contains(&record.weight) {
            warn!(
                source = %record.source_title,
                target = %record.target_title,
                weight = record.weight,
                "weight outside 1..=3; edge will not be drawn"
            );
        }
        edges.push(record);
    }
    Ok(edges)
}

/// Load `path` in full. The file handle is dropped before this returns.
pub fn load_edges(path: &Path) -> Result<Vec<EdgeRecord>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let edges = {
        let file = File::open(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_edges(file)?
    };

    if edges.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), records = edges.len(), "loaded edge records");
    Ok(edges)
}

/// Distinct themes across all records, ascending.
pub fn collect_themes(edges: &[EdgeRecord]) -> Vec<String> {
    let mut themes: Vec<String> = edges.iter().flat_map(|e| e.themes.iter().cloned()).collect();
    themes.sort();
    themes.dedup();
    themes
}
