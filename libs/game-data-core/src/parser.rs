//! Block parser for quest and item data files.
//!
//! # Format
//! ```text
//! QUEST_ID: quest_1
//! TITLE: Beginner's Luck
//! REWARD_XP: 100
//!
//! QUEST_ID: quest_2
//! TITLE: Second Steps
//! REWARD_XP: 250
//! ```
//!
//! Blocks are separated by blank lines. Every line is trimmed first, so a
//! line holding only whitespace also ends a block. Inside a block each
//! `KEY: value` line becomes one field; lines without `": "` are ignored.

use crate::error::{GameDataError, Result};
use crate::types::{Effect, FieldValue, Item, Quest, RawRecord, RecordKind};
use crate::validator;

const KEY_SEPARATOR: &str = ": ";
const QUEST_INT_FIELDS: [&str; 3] = ["reward_xp", "reward_gold", "required_level"];

/// Split file content into blocks of trimmed, non-empty lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_blocks(content: &str) -> Vec<Vec<String>> {
    let mut splitter = BlockSplitter::new();
    let lines = content
        .split('\n')
        .flat_map(|l| l.strip_suffix('\r').unwrap_or(l).split('\r'));
    for line in lines {
        splitter.process_line(line);
    }
    splitter.finalize()
}

struct BlockSplitter {
    blocks: Vec<Vec<String>>,
    current: Vec<String>,
}

impl BlockSplitter {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            current: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.flush();
        } else {
            self.current.push(trimmed.to_string());
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.blocks.push(std::mem::take(&mut self.current));
        }
    }

    fn finalize(mut self) -> Vec<Vec<String>> {
        self.flush();
        self.blocks
    }
}

/// Parse one block into a validated raw record.
///
/// Every failure, whether a bad integer, a malformed effect, or a schema
/// violation, comes back as `InvalidDataFormat("Failed to parse <kind>: ...")`.
pub fn parse_block<S: AsRef<str>>(lines: &[S], kind: RecordKind) -> Result<RawRecord> {
    build_record(lines, kind).map_err(|detail| {
        GameDataError::invalid(format!("Failed to parse {}: {}", kind.as_str(), detail))
    })
}

/// Parse one block as a typed quest.
pub fn parse_quest_block<S: AsRef<str>>(lines: &[S]) -> Result<Quest> {
    let record = parse_block(lines, RecordKind::Quest)?;
    Quest::from_record(record)
}

/// Parse one block as a typed item.
pub fn parse_item_block<S: AsRef<str>>(lines: &[S]) -> Result<Item> {
    let record = parse_block(lines, RecordKind::Item)?;
    Item::from_record(record)
}

type Detail<T> = std::result::Result<T, String>;

fn build_record<S: AsRef<str>>(lines: &[S], kind: RecordKind) -> Detail<RawRecord> {
    let mut record = RawRecord::new();

    for line in lines {
        let Some((key, value)) = line.as_ref().split_once(KEY_SEPARATOR) else {
            continue;
        };
        let key = key.to_lowercase();
        let value = value.trim();
        let field = coerce(&key, value, kind)?;
        record.insert(key, field);
    }

    validator::validate(&record, kind).map_err(|e| e.detail().to_string())?;
    Ok(record)
}

fn coerce(key: &str, value: &str, kind: RecordKind) -> Detail<FieldValue> {
    match kind {
        RecordKind::Quest if QUEST_INT_FIELDS.contains(&key) => {
            parse_int(key, value).map(FieldValue::Int)
        }
        RecordKind::Item if key == "cost" => parse_int(key, value).map(FieldValue::Int),
        RecordKind::Item if key == "effect" => parse_effect(value).map(FieldValue::Effect),
        _ => Ok(FieldValue::Text(value.to_string())),
    }
}

fn parse_int(key: &str, value: &str) -> Detail<i64> {
    parse_integer(value).ok_or_else(|| format!("invalid integer for {}: '{}'", key, value))
}

/// Decimal integer with an optional sign. Single underscores may group
/// digits (`1_000`), as in integer literals.
fn parse_integer(value: &str) -> Option<i64> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    let grouped_ok = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !grouped_ok {
        return None;
    }
    value.replace('_', "").parse::<i64>().ok()
}

/// Parse `stat:amount,stat:amount`. A repeated stat keeps the last amount.
fn parse_effect(value: &str) -> Detail<Effect> {
    let mut effect = Effect::new();

    for part in value.split(',') {
        let pieces: Vec<&str> = part.split(':').collect();
        let [stat, amount] = pieces.as_slice() else {
            return Err(format!("invalid effect entry '{}', expected stat:amount", part));
        };
        let stat = stat.trim();
        let amount = amount.trim();
        let amount = parse_integer(amount)
            .ok_or_else(|| format!("invalid effect amount for {}: '{}'", stat, amount))?;
        effect.insert(stat.to_string(), amount);
    }

    Ok(effect)
}
