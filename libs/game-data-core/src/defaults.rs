//! Default data files and the block writer.

use crate::error::{GameDataError, Result};
use crate::types::{FieldValue, Item, ItemType, Quest, RawRecord, Record, NO_PREREQUISITE};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Directory the default files are written to.
pub const DEFAULT_DATA_DIR: &str = "data";

pub const QUESTS_FILE_NAME: &str = "quests.txt";
pub const ITEMS_FILE_NAME: &str = "items.txt";

/// The quest written into a fresh `quests.txt`.
pub fn default_quests() -> Vec<Quest> {
    vec![Quest {
        quest_id: "quest_1".to_string(),
        title: "Beginner's Luck".to_string(),
        description: "Complete your first quest".to_string(),
        reward_xp: 100,
        reward_gold: 50,
        required_level: 1,
        prerequisite: NO_PREREQUISITE.to_string(),
        extra: BTreeMap::new(),
    }]
}

/// The item written into a fresh `items.txt`.
pub fn default_items() -> Vec<Item> {
    vec![Item {
        item_id: "item_1".to_string(),
        name: "Rusty Sword".to_string(),
        item_type: ItemType::Weapon,
        effect: [("strength".to_string(), 5)].into_iter().collect(),
        cost: 100,
        description: "An old sword with minimal damage.".to_string(),
        extra: BTreeMap::new(),
    }]
}

/// Serialize one record as a block: `KEY: value` lines, then a blank line.
pub fn serialize_record(record: &RawRecord) -> String {
    let mut out = String::new();
    for (key, value) in record.iter() {
        out.push_str(&format!("{}: {}\n", key.to_uppercase(), value));
    }
    out.push('\n');
    out
}

/// Serialize a sequence of records into file content.
pub fn serialize_records<'a, R: Record + 'a>(records: impl IntoIterator<Item = &'a R>) -> String {
    records
        .into_iter()
        .map(Record::to_block)
        .collect()
}

/// Write records to `path`, replacing whatever was there.
///
/// Every record is checked first; if any would not load back, nothing is
/// written and the call fails with `InvalidDataFormat`.
pub fn write_records<R: Record>(path: impl AsRef<Path>, records: &[R]) -> Result<()> {
    for record in records {
        check_writable(record)?;
    }
    fs::write(path.as_ref(), serialize_records(records)).map_err(|e| {
        GameDataError::CorruptedData(format!("Error creating {} file: {}", R::KIND.file_label(), e))
    })
}

/// Check that a record's block text parses back to the same fields.
///
/// The format has no escaping, so values that are empty, span lines, or carry
/// surrounding whitespace are lost on reload, and so is an effect with no
/// entries or with stat names holding `,` or `:`.
pub fn check_writable<R: Record>(record: &R) -> Result<()> {
    let refuse = |detail: String| {
        GameDataError::invalid(format!(
            "Cannot write {} '{}': {}",
            R::KIND.as_str(),
            record.id(),
            detail
        ))
    };

    for (key, value) in record.to_record().iter() {
        let reads_back = key.to_uppercase().to_lowercase() == key;
        if !reads_back || key.is_empty() || key != key.trim() || key.contains([':', '\n', '\r']) {
            return Err(refuse(format!("unusable field name '{}'", key)));
        }
        match value {
            FieldValue::Text(text) => {
                if text.is_empty() {
                    return Err(refuse(format!("{} is empty", key)));
                }
                if text.contains(['\n', '\r']) {
                    return Err(refuse(format!("{} spans more than one line", key)));
                }
                if text != text.trim() {
                    return Err(refuse(format!("{} has surrounding whitespace", key)));
                }
            }
            FieldValue::Int(_) => {}
            FieldValue::Effect(effect) => {
                if effect.is_empty() {
                    return Err(refuse(format!("{} has no entries", key)));
                }
                for stat in effect.keys() {
                    let unusable = stat.is_empty()
                        || stat != stat.trim()
                        || stat.contains([',', ':', '\n', '\r']);
                    if unusable {
                        return Err(refuse(format!("{} has unusable stat name '{}'", key, stat)));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Create `data/quests.txt` and `data/items.txt` if they are missing.
pub fn create_default_data_files() -> Result<()> {
    create_default_data_files_in(DEFAULT_DATA_DIR)
}

/// Create default quest and item files under `dir`.
///
/// Existing files are left alone, so calling this repeatedly is harmless.
pub fn create_default_data_files_in(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        GameDataError::CorruptedData(format!("Error creating data directory: {}", e))
    })?;

    write_if_missing(&dir.join(QUESTS_FILE_NAME), &default_quests())?;
    write_if_missing(&dir.join(ITEMS_FILE_NAME), &default_items())?;
    Ok(())
}

fn write_if_missing<R: Record>(path: &Path, records: &[R]) -> Result<()> {
    if path.exists() {
        info!("Keeping existing {:?}", path);
        return Ok(());
    }
    write_records(path, records)?;
    info!("Wrote default {} to {:?}", R::KIND.file_label(), path);
    Ok(())
}
