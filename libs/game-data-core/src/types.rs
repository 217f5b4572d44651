//! Core types for quest and item records.

use crate::error::{GameDataError, Result};
use crate::validator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stat bonuses granted by an item, keyed by stat name.
pub type Effect = BTreeMap<String, i64>;

/// Sentinel stored in `prerequisite` when a quest has none.
pub const NO_PREREQUISITE: &str = "NONE";

/// Which grammar a block is read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Quest,
    Item,
}

impl RecordKind {
    /// Name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quest => "quest",
            Self::Item => "item",
        }
    }

    /// Field holding the record's unique id.
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Quest => "quest_id",
            Self::Item => "item_id",
        }
    }

    pub(crate) fn file_label(&self) -> &'static str {
        match self {
            Self::Quest => "quests",
            Self::Item => "items",
        }
    }
}

/// A single coerced value inside a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Effect(Effect),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_effect(&self) -> Option<&Effect> {
        match self {
            Self::Effect(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Effect(effect) => {
                let joined = effect
                    .iter()
                    .map(|(stat, amount)| format!("{}:{}", stat, amount))
                    .collect::<Vec<_>>()
                    .join(",");
                f.write_str(&joined)
            }
        }
    }
}

/// Loosely-typed record: ordered `key -> value` pairs as read from a block.
///
/// Behaves like a mapping. Inserting an existing key replaces its value in
/// place, keeping the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, FieldValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// Item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Consumable => "consumable",
        }
    }

    /// Parse from string. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weapon" => Some(Self::Weapon),
            "armor" => Some(Self::Armor),
            "consumable" => Some(Self::Consumable),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub quest_id: String,
    pub title: String,
    pub description: String,
    pub reward_xp: i64,
    pub reward_gold: i64,
    pub required_level: i64,
    pub prerequisite: String,
    /// Unrecognized keys from the source block, kept verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Quest {
    pub const FIELDS: [&'static str; 7] = [
        "quest_id",
        "title",
        "description",
        "reward_xp",
        "reward_gold",
        "required_level",
        "prerequisite",
    ];

    /// Build a quest from a raw record, validating it first.
    pub fn from_record(mut record: RawRecord) -> Result<Self> {
        validator::validate_quest_data(&record)?;

        Ok(Self {
            quest_id: take_text(&mut record, "quest_id")?,
            title: take_text(&mut record, "title")?,
            description: take_text(&mut record, "description")?,
            reward_xp: take_int(&mut record, "reward_xp")?,
            reward_gold: take_int(&mut record, "reward_gold")?,
            required_level: take_int(&mut record, "required_level")?,
            prerequisite: take_text(&mut record, "prerequisite")?,
            extra: take_extra(record),
        })
    }

    /// Prerequisite quest id, or `None` for the `NONE` sentinel.
    pub fn prerequisite(&self) -> Option<&str> {
        if self.prerequisite == NO_PREREQUISITE {
            None
        } else {
            Some(&self.prerequisite)
        }
    }

    /// Back to the loosely-typed form, fields in canonical order.
    pub fn to_record(&self) -> RawRecord {
        let mut record: RawRecord = [
            ("quest_id", FieldValue::Text(self.quest_id.clone())),
            ("title", FieldValue::Text(self.title.clone())),
            ("description", FieldValue::Text(self.description.clone())),
            ("reward_xp", FieldValue::Int(self.reward_xp)),
            ("reward_gold", FieldValue::Int(self.reward_gold)),
            ("required_level", FieldValue::Int(self.required_level)),
            ("prerequisite", FieldValue::Text(self.prerequisite.clone())),
        ]
        .into_iter()
        .collect();
        for (key, value) in &self.extra {
            record.insert(key.clone(), FieldValue::Text(value.clone()));
        }
        record
    }
}

/// A validated item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub effect: Effect,
    pub cost: i64,
    pub description: String,
    /// Unrecognized keys from the source block, kept verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Item {
    pub const FIELDS: [&'static str; 6] =
        ["item_id", "name", "type", "effect", "cost", "description"];

    /// Build an item from a raw record, validating it first.
    pub fn from_record(mut record: RawRecord) -> Result<Self> {
        validator::validate_item_data(&record)?;

        let type_name = take_text(&mut record, "type")?;
        let item_type = ItemType::parse(&type_name)
            .ok_or_else(|| GameDataError::invalid(format!("Invalid item type: {}", type_name)))?;
        let effect = match record.remove("effect") {
            Some(FieldValue::Effect(effect)) => effect,
            _ => return Err(GameDataError::invalid("Effect must be a dictionary")),
        };

        Ok(Self {
            item_id: take_text(&mut record, "item_id")?,
            name: take_text(&mut record, "name")?,
            item_type,
            effect,
            cost: take_int(&mut record, "cost")?,
            description: take_text(&mut record, "description")?,
            extra: take_extra(record),
        })
    }

    /// Back to the loosely-typed form, fields in canonical order.
    pub fn to_record(&self) -> RawRecord {
        let mut record: RawRecord = [
            ("item_id", FieldValue::Text(self.item_id.clone())),
            ("name", FieldValue::Text(self.name.clone())),
            ("type", FieldValue::Text(self.item_type.as_str().to_string())),
            ("effect", FieldValue::Effect(self.effect.clone())),
            ("cost", FieldValue::Int(self.cost)),
            ("description", FieldValue::Text(self.description.clone())),
        ]
        .into_iter()
        .collect();
        for (key, value) in &self.extra {
            record.insert(key.clone(), FieldValue::Text(value.clone()));
        }
        record
    }
}

/// A record that can be read from and written to a data file.
pub trait Record: Sized {
    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn from_record(record: RawRecord) -> Result<Self>;

    fn to_record(&self) -> RawRecord;

    /// The record as file text: `KEY: value` lines and a closing blank line.
    fn to_block(&self) -> String {
        crate::defaults::serialize_record(&self.to_record())
    }
}

impl Record for Quest {
    const KIND: RecordKind = RecordKind::Quest;

    fn id(&self) -> &str {
        &self.quest_id
    }

    fn from_record(record: RawRecord) -> Result<Self> {
        Quest::from_record(record)
    }

    fn to_record(&self) -> RawRecord {
        Quest::to_record(self)
    }
}

impl Record for Item {
    const KIND: RecordKind = RecordKind::Item;

    fn id(&self) -> &str {
        &self.item_id
    }

    fn from_record(record: RawRecord) -> Result<Self> {
        Item::from_record(record)
    }

    fn to_record(&self) -> RawRecord {
        Item::to_record(self)
    }
}

// Required string fields may still hold a non-text value if the record was
// built by hand, so extraction reports rather than assumes.
fn take_text(record: &mut RawRecord, key: &str) -> Result<String> {
    match record.remove(key) {
        Some(FieldValue::Text(s)) => Ok(s),
        Some(_) => Err(GameDataError::invalid(format!("{} must be a string", key))),
        None => Err(GameDataError::invalid(format!("Missing field: {}", key))),
    }
}

fn take_int(record: &mut RawRecord, key: &str) -> Result<i64> {
    match record.remove(key) {
        Some(FieldValue::Int(n)) => Ok(n),
        Some(_) => Err(GameDataError::invalid(format!("{} must be an integer", key))),
        None => Err(GameDataError::invalid(format!("Missing field: {}", key))),
    }
}

fn take_extra(record: RawRecord) -> BTreeMap<String, String> {
    record
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
