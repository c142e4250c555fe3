// crates/slicenav-core/src/clicks.rs
//
// Click-target store: action key → absolute screen coordinate, persisted as
// a flat JSON object. The store is injected into the controller and flushed
// explicitly (save button / app exit) — mutation never writes to disk on its
// own, which keeps persistence timing under the caller's control.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub type ScreenPos = (i32, i32);

/// Built-in targets. The keys are fixed: four scoring actions, four
/// transport actions, and the external app's lock toggle.
pub const DEFAULT_TARGETS: &[(&str, ScreenPos)] = &[
    ("click1",   (100, 100)),
    ("click2",   (200, 200)),
    ("click3",   (300, 300)),
    ("rem",      (400, 400)),
    ("forward",  (500, 500)),
    ("backward", (600, 600)),
    ("start",    (700, 700)),
    ("end",      (800, 800)),
    ("lock",     (900, 900)),
];

/// Scoring keys: after the synthetic click lands, playback advances one step
/// so the reviewer is already looking at the next window.
pub const SCORING_KEYS: &[&str] = &["click1", "click2", "click3", "rem"];

/// On-disk shape: `{ "click1": [100, 100], ... }`.
#[derive(Serialize, Deserialize)]
struct TargetsFile(BTreeMap<String, ScreenPos>);

pub struct ClickStore {
    path:      PathBuf,
    positions: BTreeMap<String, ScreenPos>,
}

impl ClickStore {
    /// Load from `path`, starting from the built-in defaults. A missing or
    /// malformed file is not an error — each key keeps its default and only
    /// entries that actually parsed override it.
    pub fn load(path: PathBuf) -> Self {
        let mut positions: BTreeMap<String, ScreenPos> = DEFAULT_TARGETS
            .iter()
            .map(|(k, p)| (k.to_string(), *p))
            .collect();

        if let Ok(text) = std::fs::read_to_string(&path) {
            if let Ok(TargetsFile(saved)) = serde_json::from_str::<TargetsFile>(&text) {
                for (key, pos) in saved {
                    positions.insert(key, pos);
                }
            }
        }

        Self { path, positions }
    }

    /// Coordinates for `key`; unknown keys resolve to the screen origin.
    pub fn get(&self, key: &str) -> ScreenPos {
        self.positions.get(key).copied().unwrap_or((0, 0))
    }

    pub fn set(&mut self, key: &str, x: i32, y: i32) {
        self.positions.insert(key.to_string(), (x, y));
    }

    /// Restore every key to its built-in default, dropping any extra keys
    /// that came in from the file.
    pub fn reset(&mut self) {
        self.positions = DEFAULT_TARGETS
            .iter()
            .map(|(k, p)| (k.to_string(), *p))
            .collect();
    }

    /// Explicit flush to disk. The parent directory is created on demand so
    /// a fresh install saves cleanly.
    pub fn save(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string_pretty(&TargetsFile(self.positions.clone()))?;
        std::fs::write(&self.path, text)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when a click on `key` should also step playback forward.
    pub fn advances_playback(key: &str) -> bool {
        SCORING_KEYS.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ClickStore {
        ClickStore::load(dir.path().join("clicks.json"))
    }

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("click1"), (100, 100));
        assert_eq!(store.get("rem"), (400, 400));
        assert_eq!(store.get("lock"), (900, 900));
    }

    #[test]
    fn unknown_key_is_origin() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("no-such-key"), (0, 0));
    }

    #[test]
    fn set_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("click1", 512, 640);
        store.save().unwrap();

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.get("click1"), (512, 640));
        // Untouched keys still default.
        assert_eq!(reloaded.get("forward"), (500, 500));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clicks.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = ClickStore::load(path);
        assert_eq!(store.get("click1"), (100, 100));
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clicks.json");
        std::fs::write(&path, r#"{"click1": [1000, 1000], "rem": [2000, 2000]}"#).unwrap();
        let store = ClickStore::load(path);
        assert_eq!(store.get("click1"), (1000, 1000));
        assert_eq!(store.get("rem"), (2000, 2000));
        assert_eq!(store.get("forward"), (500, 500));
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set("click1", 999, 999);
        store.reset();
        assert_eq!(store.get("click1"), (100, 100));
    }

    #[test]
    fn scoring_keys_advance_transport_keys_do_not() {
        for key in ["click1", "click2", "click3", "rem"] {
            assert!(ClickStore::advances_playback(key), "{key}");
        }
        for key in ["lock", "forward", "backward", "start", "end", "bogus"] {
            assert!(!ClickStore::advances_playback(key), "{key}");
        }
    }
}
