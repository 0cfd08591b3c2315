//! Persisted run records.
//!
//! The store is a JSON file keyed by start tile (`"x,y"`), then by
//! configuration (`"DIR:rotation"`). It is rewritten in full after each tile
//! run; writes merge into whatever is already on disk so records for other
//! tiles and configurations survive. A missing file is an empty store.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::Path as FsPath;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::core::tile::Tile;
use crate::error::Result;
use crate::geometry::{Direction, Rotation};

/// Outcome of one (tile, direction, rotation) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub iterations: u64,
    pub success: bool,
    /// Tiles in visit order, in `"x,y"` wire form.
    pub path: Vec<String>,
    pub time: DateTime<Utc>,
}

/// All known records. BTreeMaps keep the serialized form stable across
/// rewrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsStore {
    #[serde(flatten)]
    entries: BTreeMap<String, BTreeMap<String, SearchRecord>>,
}

/// Store key for a (direction, rotation) configuration.
pub fn config_key(direction: Direction, rotation: Rotation) -> String {
    format!("{direction}:{rotation}")
}

impl ResultsStore {
    /// Read the store from `path`. A missing file yields an empty store;
    /// any other I/O or parse failure propagates.
    pub fn load(path: &FsPath) -> Result<Self> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn record(
        &self,
        tile: Tile,
        direction: Direction,
        rotation: Rotation,
    ) -> Option<&SearchRecord> {
        self.entries
            .get(&tile.to_string())?
            .get(&config_key(direction, rotation))
    }

    /// Insert or overwrite the record for one configuration of one tile.
    pub fn insert(
        &mut self,
        tile: Tile,
        direction: Direction,
        rotation: Rotation,
        record: SearchRecord,
    ) {
        self.entries
            .entry(tile.to_string())
            .or_default()
            .insert(config_key(direction, rotation), record);
    }

    /// Rewrite `path` with the on-disk store merged with this one.
    ///
    /// Entries present on disk but not in memory are preserved; entries in
    /// memory win on conflict. The write is atomic (tempfile + rename) so a
    /// crash never leaves a truncated store behind.
    pub fn save(&self, path: &FsPath) -> Result<()> {
        let mut merged = Self::load(path)?;
        for (tile_key, configs) in &self.entries {
            let slot = merged.entries.entry(tile_key.clone()).or_default();
            for (cfg_key, record) in configs {
                slot.insert(cfg_key.clone(), record.clone());
            }
        }

        let data = serde_json::to_vec_pretty(&merged)?;
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = dir {
            std::fs::create_dir_all(parent)?;
        }
        let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| FsPath::new(".")))?;
        tmp.write_all(&data)?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
