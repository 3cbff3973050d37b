//! Remove action - removes a package and the dependencies nothing else needs.

use log::debug;
use std::collections::HashSet;

use crate::package::{DependencyRegistry, InstallationState};

use super::{Mode, Notice, Packager};

/// Outcome of [`Packager::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Whether the requested package itself was removed.
    pub removed: bool,
    pub notices: Vec<Notice>,
}

impl Packager {
    /// Remove `name` if no installed package still needs it, then try to
    /// remove each of its declared dependencies the same way.
    ///
    /// Dependencies that were manually installed are never removed by the
    /// cleanup; they need their own `remove`. The manual marker of `name` is
    /// cleared only when `name` was actually removed.
    #[tracing::instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> Removal {
        let mut walk = RemoveWalk {
            registry: &self.registry,
            state: &mut self.state,
            notices: Vec::new(),
        };
        let removed = walk.remove(name, Mode::TopLevel);
        let notices = walk.notices;

        if removed {
            self.state.unmark_manual(name);
        }

        Removal { removed, notices }
    }
}

struct RemoveWalk<'a> {
    registry: &'a DependencyRegistry,
    state: &'a mut InstallationState,
    notices: Vec<Notice>,
}

impl RemoveWalk<'_> {
    fn remove(&mut self, name: &str, mode: Mode) -> bool {
        if mode == Mode::AsDependency && self.state.is_manual(name) {
            debug!("Keeping {}: manually installed", name);
            return false;
        }

        if !self.state.is_installed(name) {
            debug!("Skipping {}: not installed", name);
            self.notices.push(Notice::NotInstalled(name.to_string()));
            return false;
        }

        if self.is_needed(name) {
            debug!("Keeping {}: still needed", name);
            if mode == Mode::TopLevel {
                self.notices.push(Notice::StillNeeded(name.to_string()));
            }
            return false;
        }

        self.state.remove(name);
        self.notices.push(Notice::Removing(name.to_string()));

        let registry = self.registry;
        for dependency in registry.dependencies_of(name) {
            self.remove(dependency, Mode::AsDependency);
        }

        true
    }

    /// Whether some installed package depends on `name`, directly or through
    /// a chain of packages that are themselves not installed.
    ///
    /// Each dependent is walked at most once, so cyclic declarations end.
    fn is_needed(&self, name: &str) -> bool {
        let mut visited = HashSet::new();
        self.is_needed_by_any(name, &mut visited)
    }

    fn is_needed_by_any(&self, name: &str, visited: &mut HashSet<String>) -> bool {
        for dependent in self.registry.dependents_of(name) {
            if !visited.insert(dependent.clone()) {
                continue;
            }
            if self.state.is_installed(dependent) {
                debug!("{} is needed by {}", name, dependent);
                return true;
            }
            if self.is_needed_by_any(dependent, visited) {
                return true;
            }
        }
        false
    }
}
