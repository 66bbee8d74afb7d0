#![cfg(feature = "std")]
//! Leaderboard repository: ranked play times persisted as JSON. An
//! explicit value handed to whoever needs it; nothing here is
//! process-global. It consumes the elapsed time carried by `Solved`
//! events and knows nothing else about the engine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One recorded result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub play_time_ms: u64,
}

/// Ranked list of finished games, fastest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result, keeping the list sorted by play time. Ties keep
    /// insertion order.
    pub fn record(&mut self, name: impl Into<String>, play_time_ms: u64) {
        self.entries.push(ScoreEntry {
            name: name.into(),
            play_time_ms,
        });
        self.entries.sort_by_key(|entry| entry.play_time_ms);
    }

    /// All entries, fastest first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Entries alongside their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &ScoreEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry))
    }

    /// Load from a JSON file. A missing file is an empty board.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let mut entries: Vec<ScoreEntry> = serde_json::from_str(&text)?;
        entries.sort_by_key(|entry| entry.play_time_ms);
        Ok(Self { entries })
    }

    /// Write the full board to a JSON file, replacing any existing one.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}
