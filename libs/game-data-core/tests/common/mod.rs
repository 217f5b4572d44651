//! Shared fixtures for file-level tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const QUEST_1: &str = "QUEST_ID: quest_1\n\
TITLE: Test\n\
DESCRIPTION: d\n\
REWARD_XP: 10\n\
REWARD_GOLD: 5\n\
REQUIRED_LEVEL: 1\n\
PREREQUISITE: NONE\n";

pub const QUEST_2: &str = "QUEST_ID: quest_2\n\
TITLE: The Long Road\n\
DESCRIPTION: Walk to the next village, then talk to the smith\n\
REWARD_XP: 250\n\
REWARD_GOLD: 40\n\
REQUIRED_LEVEL: 3\n\
PREREQUISITE: quest_1\n";

pub const POTION: &str = "ITEM_ID: health_potion\n\
NAME: Health Potion\n\
TYPE: consumable\n\
EFFECT: health:20\n\
COST: 25\n\
DESCRIPTION: Restores a little health.\n";

pub const PLATE: &str = "ITEM_ID: iron_plate\n\
NAME: Iron Plate\n\
TYPE: armor\n\
EFFECT: max_health:30,agility:-2\n\
COST: 300\n\
DESCRIPTION: Heavy, but sturdy.\n";

/// Temp directory holding one data file.
pub struct DataFile {
    pub dir: TempDir,
    pub path: PathBuf,
}

/// Write `content` to a fresh temp file.
pub fn data_file(name: &str, content: &str) -> DataFile {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write data file");
    DataFile { dir, path }
}

/// Join blocks with one blank line between them.
pub fn blocks(parts: &[&str]) -> String {
    parts.join("\n")
}
