use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info};

use super::item::Item;

/// Name of the global the batch job assigns the dataset to.
pub const DATA_VARIABLE: &str = "keywordData";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("no `keywordData` declaration found in data file")]
    MissingDeclaration,
    #[error("invalid keyword data: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"(?:var|const|let)\s+{}\s*=\s*",
            DATA_VARIABLE
        ))
        .expect("static declaration pattern")
    })
}

/// Parse the contents of a data file. Accepts either the `data.js` script
/// the batch job writes (`var keywordData = [...];`) or a bare JSON array.
/// Only the first JSON value after the declaration is read; anything that
/// follows it in the script is ignored.
pub fn parse_dataset(content: &str) -> Result<Vec<Item>, DataError> {
    let trimmed = content.trim_start_matches('\u{feff}').trim();
    let json = if trimmed.starts_with('[') {
        trimmed
    } else {
        declaration_pattern()
            .find(trimmed)
            .map(|m| &trimmed[m.end()..])
            .ok_or(DataError::MissingDeclaration)?
    };
    let items = serde_json::Deserializer::from_str(json)
        .into_iter::<Vec<Item>>()
        .next()
        .ok_or(DataError::MissingDeclaration)??;
    debug!(count = items.len(), "parsed keyword data");
    Ok(items)
}

pub async fn load_dataset(path: &Path) -> Result<Vec<Item>, DataError> {
    let content = tokio::fs::read_to_string(path).await?;
    let items = parse_dataset(&content)?;
    info!(path = %path.display(), count = items.len(), "loaded keyword data");
    Ok(items)
}
