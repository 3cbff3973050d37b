use log::debug;
use std::path::PathBuf;

use crate::{package::StateStore, runtime::Runtime};

/// Options shared by every command.
pub struct Config<R: Runtime> {
    pub runtime: R,
    pub state_path: Option<PathBuf>,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, state_path: Option<PathBuf>) -> Self {
        match &state_path {
            Some(path) => debug!("Using state file {:?}", path),
            None => debug!("No state file, session state is kept in memory"),
        }
        Self {
            runtime,
            state_path,
        }
    }

    /// Snapshot store for the configured state file, if any.
    pub fn store(&self) -> Option<StateStore<'_, R>> {
        self.state_path
            .as_ref()
            .map(|path| StateStore::new(&self.runtime, path.clone()))
    }
}
