use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::MAX_HIGH_SCORES;
use crate::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

impl HighScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self { name: name.into(), score }
    }

    /// Parses one `name,score` record. The name runs up to the first comma.
    fn parse(line: &str) -> Option<Self> {
        let (name, score) = line.split_once(',')?;
        let score = score.trim().parse().ok()?;
        Some(Self::new(name, score))
    }
}

/// Highest score first, ties in their existing order, at most `MAX_HIGH_SCORES`.
fn rank(entries: &mut Vec<HighScoreEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_HIGH_SCORES);
}

pub fn parse_high_scores(text: &str) -> Vec<HighScoreEntry> {
    let mut entries: Vec<HighScoreEntry> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let entry = HighScoreEntry::parse(line);
            if entry.is_none() {
                tracing::debug!(line, "skipping malformed high-score record");
            }
            entry
        })
        .collect();
    rank(&mut entries);
    entries
}

fn format_high_scores(entries: &[HighScoreEntry]) -> String {
    entries.iter().map(|e| format!("{},{}\n", e.name, e.score)).collect()
}

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<HighScoreEntry> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_high_scores(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                let err = StoreError::Read { path: self.path.clone(), source };
                tracing::warn!("{err}");
                Vec::new()
            }
        }
    }

    /// Records a result and returns the table as written.
    pub fn save(&self, name: &str, score: u32) -> Result<Vec<HighScoreEntry>, StoreError> {
        let mut entries = self.load();
        entries.push(HighScoreEntry::new(name, score));
        rank(&mut entries);

        fs::write(&self.path, format_high_scores(&entries))
            .map_err(|source| StoreError::Write { path: self.path.clone(), source })?;
        tracing::info!(name, score, "high score recorded");
        Ok(entries)
    }
}
