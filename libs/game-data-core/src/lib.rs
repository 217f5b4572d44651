//! Loader and validator for the quest and item data files.
//!
//! Provides:
//! - Block parser for the `KEY: value` text format
//! - Schema validation for quest and item records
//! - File loading into id-keyed maps
//! - Default data file generation
//! - Typed records (Quest, Item, ItemType, Effect)

pub mod defaults;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;
pub mod validator;

pub use defaults::{
    check_writable, create_default_data_files, create_default_data_files_in, default_items,
    default_quests, serialize_record, serialize_records, write_records, DEFAULT_DATA_DIR,
    ITEMS_FILE_NAME, QUESTS_FILE_NAME,
};
pub use error::{GameDataError, Result};
pub use loader::{
    load, load_items, load_quests, load_records, DEFAULT_ITEMS_PATH, DEFAULT_QUESTS_PATH,
};
pub use parser::{parse_block, parse_item_block, parse_quest_block, split_blocks};
pub use types::{
    Effect, FieldValue, Item, ItemType, Quest, RawRecord, Record, RecordKind, NO_PREREQUISITE,
};
pub use validator::{validate, validate_item_data, validate_quest_data};
