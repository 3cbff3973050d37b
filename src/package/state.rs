//! Installed and manually-installed package sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which packages are installed, and which of those the user asked for.
///
/// Every manually installed package is also installed; the mutators keep
/// that true on their own.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InstallationState {
    #[serde(default)]
    installed: BTreeSet<String>,
    #[serde(default)]
    manual: BTreeSet<String>,
}

impl InstallationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.contains(name)
    }

    pub fn is_manual(&self, name: &str) -> bool {
        self.manual.contains(name)
    }

    /// Add `name` to the installed set. Returns `false` if it was already there.
    pub fn insert(&mut self, name: &str) -> bool {
        self.installed.insert(name.to_string())
    }

    /// Drop `name` from the installed set, and from the manual set with it.
    /// Returns `false` if it was not installed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.manual.remove(name);
        self.installed.remove(name)
    }

    /// Mark an installed package as manually installed.
    /// Returns `false` if `name` is not installed.
    pub fn mark_manual(&mut self, name: &str) -> bool {
        if !self.installed.contains(name) {
            return false;
        }
        self.manual.insert(name.to_string());
        true
    }

    /// Clear the manual marker. Returns `false` if `name` was not marked.
    pub fn unmark_manual(&mut self, name: &str) -> bool {
        self.manual.remove(name)
    }

    pub fn installed(&self) -> &BTreeSet<String> {
        &self.installed
    }

    pub fn manual(&self) -> &BTreeSet<String> {
        &self.manual
    }

    /// Drop manual markers that point at packages no longer installed.
    ///
    /// Only needed for states built outside the mutators above, such as a
    /// hand-edited snapshot.
    pub fn repair(&mut self) -> usize {
        let before = self.manual.len();
        let installed = &self.installed;
        self.manual.retain(|name| installed.contains(name));
        before - self.manual.len()
    }
}
