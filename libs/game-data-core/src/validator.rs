//! Schema checks for raw quest and item records.
//!
//! Validation only inspects a record; it never normalizes or mutates it.
//! Checks run in a fixed order and the first violation wins.

use crate::error::{GameDataError, Result};
use crate::types::{FieldValue, Item, ItemType, Quest, RawRecord, RecordKind};

const QUEST_INT_FIELDS: [&str; 3] = ["reward_xp", "reward_gold", "required_level"];

/// Check a raw quest record. Extra keys are allowed.
pub fn validate_quest_data(record: &RawRecord) -> Result<bool> {
    for key in Quest::FIELDS {
        if !record.contains_key(key) {
            return Err(GameDataError::invalid(format!("Missing quest field: {}", key)));
        }
    }

    for key in QUEST_INT_FIELDS {
        if record.get(key).and_then(FieldValue::as_int).is_none() {
            return Err(GameDataError::invalid(format!("{} must be an integer", key)));
        }
    }

    Ok(true)
}

/// Check a raw item record. Extra keys are allowed.
pub fn validate_item_data(record: &RawRecord) -> Result<bool> {
    for key in Item::FIELDS {
        if !record.contains_key(key) {
            return Err(GameDataError::invalid(format!("Missing item field: {}", key)));
        }
    }

    let type_ok = record
        .get("type")
        .and_then(FieldValue::as_text)
        .and_then(ItemType::parse)
        .is_some();
    if !type_ok {
        let shown = record.get("type").map(ToString::to_string).unwrap_or_default();
        return Err(GameDataError::invalid(format!("Invalid item type: {}", shown)));
    }

    if record.get("cost").and_then(FieldValue::as_int).is_none() {
        return Err(GameDataError::invalid("Cost must be an integer"));
    }

    if record.get("effect").and_then(FieldValue::as_effect).is_none() {
        return Err(GameDataError::invalid("Effect must be a dictionary"));
    }

    Ok(true)
}

/// Dispatch on record kind.
pub fn validate(record: &RawRecord, kind: RecordKind) -> Result<bool> {
    match kind {
        RecordKind::Quest => validate_quest_data(record),
        RecordKind::Item => validate_item_data(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Effect;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn quest() -> RawRecord {
        [
            ("quest_id", text("quest_1")),
            ("title", text("Test")),
            ("description", text("d")),
            ("reward_xp", FieldValue::Int(10)),
            ("reward_gold", FieldValue::Int(5)),
            ("required_level", FieldValue::Int(1)),
            ("prerequisite", text("NONE")),
        ]
        .into_iter()
        .collect()
    }

    fn item() -> RawRecord {
        let effect: Effect = [("strength".to_string(), 5)].into_iter().collect();
        [
            ("item_id", text("item_1")),
            ("name", text("Rusty Sword")),
            ("type", text("weapon")),
            ("effect", FieldValue::Effect(effect)),
            ("cost", FieldValue::Int(100)),
            ("description", text("Old.")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn valid_quest_passes() {
        assert_eq!(validate_quest_data(&quest()), Ok(true));
    }

    #[test]
    fn quest_extra_keys_tolerated() {
        let mut record = quest();
        record.insert("region", text("north"));
        assert_eq!(validate(&record, RecordKind::Quest), Ok(true));
    }

    #[test]
    fn quest_missing_field_named() {
        let mut record = quest();
        record.remove("reward_gold");
        assert_eq!(
            validate_quest_data(&record),
            Err(GameDataError::invalid("Missing quest field: reward_gold"))
        );
    }

    #[test]
    fn quest_first_missing_field_wins() {
        let mut record = quest();
        record.remove("prerequisite");
        record.remove("title");
        assert_eq!(
            validate_quest_data(&record),
            Err(GameDataError::invalid("Missing quest field: title"))
        );
    }

    #[test]
    fn quest_numeric_string_rejected() {
        let mut record = quest();
        record.insert("required_level", text("1"));
        assert_eq!(
            validate_quest_data(&record),
            Err(GameDataError::invalid("required_level must be an integer"))
        );
    }

    #[test]
    fn valid_item_passes() {
        assert_eq!(validate_item_data(&item()), Ok(true));
    }

    #[test]
    fn item_missing_cost_named() {
        let mut record = item();
        record.remove("cost");
        assert_eq!(
            validate_item_data(&record),
            Err(GameDataError::invalid("Missing item field: cost"))
        );
    }

    #[test]
    fn item_type_must_be_known() {
        for bad in ["shield", "Weapon", "WEAPON", ""] {
            let mut record = item();
            record.insert("type", text(bad));
            assert_eq!(
                validate(&record, RecordKind::Item),
                Err(GameDataError::invalid(format!("Invalid item type: {}", bad)))
            );
        }
    }

    #[test]
    fn item_type_checked_before_cost() {
        let mut record = item();
        record.insert("type", text("relic"));
        record.insert("cost", text("free"));
        assert_eq!(
            validate_item_data(&record),
            Err(GameDataError::invalid("Invalid item type: relic"))
        );
    }

    #[test]
    fn item_cost_must_be_int() {
        let mut record = item();
        record.insert("cost", text("100"));
        assert_eq!(
            validate_item_data(&record),
            Err(GameDataError::invalid("Cost must be an integer"))
        );
    }

    #[test]
    fn item_effect_must_be_mapping() {
        let mut record = item();
        record.insert("effect", text("strength:5"));
        assert_eq!(
            validate_item_data(&record),
            Err(GameDataError::invalid("Effect must be a dictionary"))
        );
    }
}
