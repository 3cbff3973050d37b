//! Install action - installs a package and everything it depends on.

use log::debug;
use std::collections::HashSet;

use crate::package::{DependencyRegistry, InstallationState};

use super::{Mode, Notice, Packager};

impl Packager {
    /// Install `name` and its transitive dependencies, then mark `name` as
    /// manually installed.
    ///
    /// Dependencies are visited depth-first in declared order. Only the
    /// top-level package reports "already installed"; dependencies that are
    /// already present are skipped silently. Undeclared names are leaves.
    #[tracing::instrument(skip(self))]
    pub fn install(&mut self, name: &str) -> Vec<Notice> {
        let mut walk = InstallWalk {
            registry: &self.registry,
            state: &mut self.state,
            in_progress: HashSet::new(),
            notices: Vec::new(),
        };
        walk.install(name, Mode::TopLevel);
        let notices = walk.notices;

        if !self.state.is_manual(name) {
            debug!("Marking {} as manually installed", name);
        }
        self.state.mark_manual(name);

        notices
    }
}

struct InstallWalk<'a> {
    registry: &'a DependencyRegistry,
    state: &'a mut InstallationState,
    in_progress: HashSet<String>,
    notices: Vec<Notice>,
}

impl InstallWalk<'_> {
    fn install(&mut self, name: &str, mode: Mode) {
        // A package already on the stack belongs to a dependency cycle
        if !self.in_progress.insert(name.to_string()) {
            debug!("Skipping {}: already being installed", name);
            return;
        }

        let registry = self.registry;
        for dependency in registry.dependencies_of(name) {
            self.install(dependency, Mode::AsDependency);
        }

        self.in_progress.remove(name);

        if self.state.insert(name) {
            debug!("Installed {} ({:?})", name, mode);
            self.notices.push(Notice::Installing(name.to_string()));
        } else if mode == Mode::TopLevel {
            self.notices.push(Notice::AlreadyInstalled(name.to_string()));
        }
    }
}
