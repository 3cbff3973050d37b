//! Package data model
//!
//! This module holds the dependency registry, the installation state and the
//! snapshot store that persists both between sessions.

mod registry;
mod state;
mod store;

pub use registry::DependencyRegistry;
pub use state::InstallationState;
pub use store::{Snapshot, StateStore};
