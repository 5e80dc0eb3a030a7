//! Loading dictionaries and catalogs from files.

use std::io::Read;

use thiserror::Error;
use tracing::debug;

use crate::{registry::Catalog, trie, trie::Trie};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed dictionary: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Line {line}: {source}")]
    Entry { line: u64, source: trie::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, serde::Deserialize)]
struct Record {
    key: String,
    value: String,
}

/// Reads a tab separated `key<TAB>value` file into a trie.
///
/// Every key must be unique; a repeated key is reported with its line.
pub fn dictionary(reader: impl Read) -> Result<Trie<String, String>> {
    let mut trie = Trie::new();

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);
    let mut raw = csv::StringRecord::new();
    while rdr.read_record(&mut raw)? {
        let line = raw.position().map(csv::Position::line).unwrap_or_default();
        let record: Record = raw.deserialize(None)?;
        trie.define(record.key, record.value)
            .map_err(|source| Error::Entry { line, source })?;
    }

    debug!(keys = trie.len(), "Loaded dictionary");
    Ok(trie)
}

/// Reads a JSON [`Catalog`].
pub fn catalog(reader: impl Read) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_reader(reader)?;
    debug!(
        students = catalog.students.len(),
        courses = catalog.courses.len(),
        events = catalog.events.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}
