//! Snapshot persistence for a packager session.
//!
//! A snapshot is the whole dependency registry plus the installation state,
//! stored as pretty-printed JSON. The reverse index is stored as-is, so stale
//! entries left by redeclarations survive a save/load cycle.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::{DependencyRegistry, InstallationState};

/// Serialized form of a packager.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub registry: DependencyRegistry,
    #[serde(default)]
    pub state: InstallationState,
}

/// Loads and saves a [`Snapshot`] at a fixed path.
pub struct StateStore<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> StateStore<'a, R> {
    pub fn new(runtime: &'a R, path: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Temporary file written before being renamed over the snapshot.
    ///
    /// Returns: `<path>.tmp`
    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Load the snapshot.
    ///
    /// Returns `None` if no snapshot has been saved yet.
    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> Result<Option<Snapshot>> {
        if !self.runtime.exists(&self.path) {
            log::debug!("No snapshot at {:?}", self.path);
            return Ok(None);
        }

        let content = self
            .runtime
            .read_to_string(&self.path)
            .with_context(|| format!("Failed to read state from {:?}", self.path))?;
        let mut snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse state from {:?}", self.path))?;

        let dropped = snapshot.state.repair();
        if dropped > 0 {
            log::warn!(
                "Dropped {} manual marker(s) for packages not installed in {:?}",
                dropped,
                self.path
            );
        }

        Ok(Some(snapshot))
    }

    /// Save the snapshot, replacing any previous one.
    #[tracing::instrument(skip(self, snapshot))]
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !self.runtime.exists(parent)
        {
            self.runtime.create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        let temp_path = self.temp_path();
        self.runtime
            .write(&temp_path, content.as_bytes())
            .with_context(|| format!("Failed to save state to {:?}", temp_path))?;

        if let Err(e) = self.runtime.rename(&temp_path, &self.path) {
            let _ = self.runtime.remove_file(&temp_path);
            return Err(e).with_context(|| format!("Failed to save state to {:?}", self.path));
        }

        log::debug!("Saved state to {:?}", self.path);
        Ok(())
    }
}
