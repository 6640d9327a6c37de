use std::fs::File;
use std::io::Read;
use std::path::Path;

use validator::Validate;

use crate::data::models::{VocabError, Vocabulary, WordEntry};

pub const REQUIRED_COLUMNS: [&str; 2] = ["word", "definition"];

pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, VocabError> {
    if !path.exists() {
        return Err(VocabError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let vocabulary = parse_vocabulary(file)?;
    log::info!("Loaded {} words from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Parses a headed CSV into a vocabulary. Unknown columns are ignored.
pub fn parse_vocabulary<R: Read>(reader: R) -> Result<Vocabulary, VocabError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(VocabError::Empty);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(VocabError::MissingColumns(missing));
    }

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let entry: WordEntry = record.deserialize(Some(&headers))?;
        if let Err(e) = entry.validate() {
            // Quoted fields may span lines, so take the line the record starts on
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(VocabError::InvalidEntry {
                line,
                reason: e.to_string(),
            });
        }
        entries.push(entry);
    }

    Vocabulary::new(entries)
}
