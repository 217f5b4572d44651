//! Subcommand handlers. Output goes to the supplied writer.

use crate::config::CliConfig;
use anyhow::{Context, Result};
use game_data_core::{create_default_data_files_in, load_items, load_quests, Item, Quest};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Which record kind a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Quests,
    Items,
}

#[derive(Serialize)]
struct Listing<'a> {
    quests: &'a BTreeMap<String, Quest>,
    items: &'a BTreeMap<String, Item>,
}

/// Write default files into the configured data directory.
pub fn init(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    create_default_data_files_in(config.data_dir())
        .with_context(|| format!("initializing {}", config.data_dir().display()))?;
    writeln!(out, "Data files ready in {}", config.data_dir().display())?;
    Ok(())
}

/// Bootstrap defaults, then load and report both files.
pub fn list(config: &CliConfig, json: bool, out: &mut impl Write) -> Result<()> {
    init(config, &mut std::io::sink())?;

    let quests = load_quests(config.quests_path())?;
    let items = load_items(config.items_path())?;

    if json {
        let listing = Listing {
            quests: &quests,
            items: &items,
        };
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Loaded {} quests: {}", quests.len(), join_ids(quests.keys()))?;
        writeln!(out, "Loaded {} items: {}", items.len(), join_ids(items.keys()))?;
    }
    Ok(())
}

/// Load a single file and report what it holds.
pub fn check(kind: Kind, path: &Path, out: &mut impl Write) -> Result<()> {
    let count = match kind {
        Kind::Quests => load_quests(path)?.len(),
        Kind::Items => load_items(path)?.len(),
    };
    writeln!(out, "{}: {} valid records", path.display(), count)?;
    Ok(())
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a String>) -> String {
    ids.map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_data_core::GameDataError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> CliConfig {
        CliConfig::from_sources(Some(dir.path().join("data")), None)
    }

    #[test]
    fn list_bootstraps_and_reports() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        list(&config(&dir), false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Loaded 1 quests: quest_1\nLoaded 1 items: item_1\n"
        );
    }

    #[test]
    fn list_json() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        list(&config(&dir), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["quests"]["quest_1"]["reward_xp"], 100);
        assert_eq!(value["items"]["item_1"]["type"], "weapon");
    }

    #[test]
    fn check_reports_count() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        init(&config, &mut std::io::sink()).unwrap();
        let mut out = Vec::new();
        check(Kind::Items, &config.items_path(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with(": 1 valid records\n"));
    }

    #[test]
    fn check_surfaces_library_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = check(Kind::Quests, &missing, &mut std::io::sink()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameDataError>(),
            Some(GameDataError::MissingDataFile(_))
        ));
    }
}
