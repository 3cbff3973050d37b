use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use crate::{application::Packager, runtime::Runtime};

mod command;
pub mod config;
mod session;

pub use command::Command;
pub use session::{Flow, Session};

use config::Config;

/// Run the command loop on stdin
#[tracing::instrument(skip(config))]
pub fn shell<R: Runtime>(config: Config<R>) -> Result<()> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();
    execute(&config, stdin.lock(), std::io::stdout().lock(), prompt)
}

/// Run the commands of a script file
#[tracing::instrument(skip(config))]
pub fn run<R: Runtime>(script: &Path, config: Config<R>) -> Result<()> {
    let reader = config
        .runtime
        .open(script)
        .with_context(|| format!("Failed to open script {:?}", script))?;
    execute(
        &config,
        BufReader::new(reader),
        std::io::stdout().lock(),
        false,
    )
}

/// Load the saved state, run the command loop over `input`, save the state.
pub fn execute<R: Runtime, B: BufRead, W: Write>(
    config: &Config<R>,
    input: B,
    out: W,
    prompt: bool,
) -> Result<()> {
    let store = config.store();

    let packager = match store.as_ref().map(|s| s.load()).transpose()?.flatten() {
        Some(snapshot) => {
            info!(
                "Restored {} installed package(s), {} manually installed",
                snapshot.state.installed().len(),
                snapshot.state.manual().len()
            );
            Packager::from_snapshot(snapshot)
        }
        None => Packager::new(),
    };

    let mut session = Session::new(packager, out);
    let flow = session.run(input, prompt)?;
    debug!("Session finished with {:?}", flow);

    if let Some(store) = &store {
        store.save(&session.packager().to_snapshot())?;
    }

    Ok(())
}
