// League persistence: rows serialized as a JSON array of arrays of names.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::league::{League, LeagueError, Row, RowGrowth};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access league file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse league file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode league for {path}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("league file {path} does not describe a valid league: {source}")]
    InvalidLeague { path: PathBuf, source: LeagueError },
}

/// Somewhere a league can be written to and read back from.
pub trait LeagueStore {
    fn save(&self, path: &Path, league: &League) -> Result<(), StoreError>;

    /// Rebuild the stored league, placing players according to `growth`.
    fn load(&self, path: &Path, growth: RowGrowth) -> Result<League, StoreError>;
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn encode(path: &Path, league: &League, pretty: bool) -> Result<String, StoreError> {
    let rows = league.players();
    let json = if pretty {
        serde_json::to_string_pretty(rows)
    } else {
        serde_json::to_string(rows)
    };
    json.map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse stored rows and replay them through `add_player`.
fn decode(path: &Path, text: &str, growth: RowGrowth) -> Result<League, StoreError> {
    let rows: Vec<Row> = serde_json::from_str(text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let league = League::from_rows(&rows, growth).map_err(|source| StoreError::InvalidLeague {
        path: path.to_path_buf(),
        source,
    })?;

    if league.players() != rows.as_slice() {
        warn!(
            "Rows in {} do not match the {:?} growth policy; players were re-seated in stored order",
            path.display(),
            growth
        );
    }

    Ok(league)
}

// ---------------------------------------------------------------------------
// JSON file store
// ---------------------------------------------------------------------------

/// Stores leagues as JSON files on disk. Saving creates or truncates the
/// target file; parent directories must already exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore {
    pub pretty: bool,
}

impl JsonFileStore {
    pub fn new(pretty: bool) -> Self {
        JsonFileStore { pretty }
    }
}

impl LeagueStore for JsonFileStore {
    fn save(&self, path: &Path, league: &League) -> Result<(), StoreError> {
        let json = encode(path, league, self.pretty)?;
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "Saved league with {} players to {}",
            league.player_count(),
            path.display()
        );
        Ok(())
    }

    fn load(&self, path: &Path, growth: RowGrowth) -> Result<League, StoreError> {
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let league = decode(path, &text, growth)?;
        info!(
            "Loaded league with {} players from {}",
            league.player_count(),
            path.display()
        );
        Ok(league)
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Keeps encoded leagues in a map keyed by path. Goes through the same JSON
/// encoding as [`JsonFileStore`] without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Seed the store with raw text, bypassing encoding.
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.borrow_mut().insert(path.into(), text.into());
    }
}

impl LeagueStore for MemoryStore {
    fn save(&self, path: &Path, league: &League) -> Result<(), StoreError> {
        let json = encode(path, league, false)?;
        debug!("Stored league in memory under {}", path.display());
        self.files.borrow_mut().insert(path.to_path_buf(), json);
        Ok(())
    }

    fn load(&self, path: &Path, growth: RowGrowth) -> Result<League, StoreError> {
        let text = self.contents(path).ok_or_else(|| StoreError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no league stored"),
        })?;
        decode(path, &text, growth)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
