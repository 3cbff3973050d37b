//! List action - queries installed packages.

use std::collections::BTreeSet;

use super::Packager;

impl Packager {
    /// All installed packages, whether requested or pulled in as a dependency.
    pub fn list(&self) -> &BTreeSet<String> {
        self.state.installed()
    }
}
