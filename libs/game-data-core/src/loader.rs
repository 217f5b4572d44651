//! Load quest and item files into id-keyed maps.

use crate::error::{GameDataError, Result};
use crate::parser::{parse_block, split_blocks};
use crate::types::{Item, Quest, RawRecord, Record, RecordKind};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default location of the quests file.
pub const DEFAULT_QUESTS_PATH: &str = "data/quests.txt";

/// Default location of the items file.
pub const DEFAULT_ITEMS_PATH: &str = "data/items.txt";

/// Load every quest in `path`, keyed by `quest_id`.
pub fn load_quests(path: impl AsRef<Path>) -> Result<BTreeMap<String, Quest>> {
    load(path.as_ref())
}

/// Load every item in `path`, keyed by `item_id`.
pub fn load_items(path: impl AsRef<Path>) -> Result<BTreeMap<String, Item>> {
    load(path.as_ref())
}

/// Load any record type from a data file.
///
/// A single bad block aborts the whole load. When two blocks share an id the
/// later one replaces the earlier one.
pub fn load<R: Record>(path: &Path) -> Result<BTreeMap<String, R>> {
    let mut records = BTreeMap::new();

    for record in load_blocks(path, R::KIND)? {
        let record = R::from_record(record)?;
        let id = record.id().to_string();
        if records.insert(id.clone(), record).is_some() {
            warn!("Duplicate {} id '{}' in {:?}, overwriting", R::KIND.as_str(), id, path);
        }
    }

    info!("Loaded {} {} from {:?}", records.len(), R::KIND.file_label(), path);
    Ok(records)
}

/// Load a data file as loosely-typed records, keyed by the kind's id field.
pub fn load_records(path: impl AsRef<Path>, kind: RecordKind) -> Result<BTreeMap<String, RawRecord>> {
    let path = path.as_ref();
    let mut records = BTreeMap::new();

    for record in load_blocks(path, kind)? {
        let id = record
            .get(kind.id_field())
            .map(ToString::to_string)
            .ok_or_else(|| {
                GameDataError::invalid(format!("Missing {} field: {}", kind.as_str(), kind.id_field()))
            })?;
        if records.insert(id.clone(), record).is_some() {
            warn!("Duplicate {} id '{}' in {:?}, overwriting", kind.as_str(), id, path);
        }
    }

    info!("Loaded {} {} from {:?}", records.len(), kind.file_label(), path);
    Ok(records)
}

fn load_blocks(path: &Path, kind: RecordKind) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(GameDataError::MissingDataFile(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        GameDataError::CorruptedData(format!("Error reading {} file: {}", kind.file_label(), e))
    })?;

    split_blocks(&content)
        .iter()
        .enumerate()
        .map(|(idx, lines)| {
            debug!("Parsing {} block {} ({} lines)", kind.as_str(), idx + 1, lines.len());
            parse_block(lines.as_slice(), kind)
        })
        .collect()
}
