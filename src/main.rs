use anyhow::Result;
use clap::Parser;
use packager::commands::{self, config::Config};
use std::path::PathBuf;

/// packager - track installed packages and their dependencies
///
/// Reads commands one per line and keeps dependencies installed only while
/// something still needs them:
///
///   DEPEND name dep...   declare the dependencies of a package
///   INSTALL name         install a package and its dependencies
///   REMOVE name          remove a package and dependencies nothing else needs
///   LIST                 list installed packages
///   END                  stop reading commands
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load state from and save it back to this file (also via PACKAGER_STATE)
    #[arg(
        long = "state",
        short = 's',
        env = "PACKAGER_STATE",
        value_name = "PATH",
        global = true
    )]
    pub state: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Read commands from stdin (the default)
    Shell,

    /// Read commands from a script file
    Run(RunArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// File with one command per line
    #[arg(value_name = "FILE")]
    pub script: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(packager::runtime::RealRuntime, cli.state);

    match cli.command {
        None | Some(Commands::Shell) => commands::shell(config)?,
        Some(Commands::Run(args)) => commands::run(&args.script, config)?,
    }
    Ok(())
}
