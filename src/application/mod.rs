//! Application layer - the dependency-state engine.
//!
//! [`Packager`] owns the dependency registry and the installation state and
//! exposes the four operations the command loop drives: declare, install,
//! remove and list. Outcomes are reported as [`Notice`] values rather than
//! errors; nothing in here can fail.

mod install;
mod list;
mod notice;
mod remove;

pub use notice::Notice;
pub use remove::Removal;

use crate::package::{DependencyRegistry, InstallationState, Snapshot};

/// Whether an install/remove step was requested by the user or reached while
/// walking someone else's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    TopLevel,
    AsDependency,
}

/// Installed packages and their declared dependencies.
#[derive(Debug, Clone, Default)]
pub struct Packager {
    registry: DependencyRegistry,
    state: InstallationState,
}

impl Packager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            registry: snapshot.registry,
            state: snapshot.state,
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            registry: self.registry.clone(),
            state: self.state.clone(),
        }
    }

    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }

    pub fn state(&self) -> &InstallationState {
        &self.state
    }

    /// Declare the direct dependencies of `name`, replacing any earlier
    /// declaration. Installs nothing.
    #[tracing::instrument(skip(self, dependencies))]
    pub fn declare<I, S>(&mut self, name: &str, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.declare(name, dependencies);
        log::debug!(
            "{} depends on {:?}",
            name,
            self.registry.dependencies_of(name)
        );
    }
}
