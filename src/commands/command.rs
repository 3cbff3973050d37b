//! Parsing of command-loop input lines.

use anyhow::{Result, anyhow};
use std::str::FromStr;

/// One line of command-loop input.
/// Format: "DEPEND name dep...", "INSTALL name", "REMOVE name", "LIST" or "END"
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Depend { name: String, dependencies: Vec<String> },
    Install(String),
    Remove(String),
    List,
    End,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Depend { name, dependencies } => {
                write!(f, "DEPEND {}", name)?;
                for dependency in dependencies {
                    write!(f, " {}", dependency)?;
                }
                Ok(())
            }
            Command::Install(name) => write!(f, "INSTALL {}", name),
            Command::Remove(name) => write!(f, "REMOVE {}", name),
            Command::List => write!(f, "LIST"),
            Command::End => write!(f, "END"),
        }
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let keyword = words.next().ok_or_else(|| anyhow!("empty command"))?;

        let mut package = || {
            words
                .next()
                .map(String::from)
                .ok_or_else(|| anyhow!("{} requires a package name", keyword))
        };

        match keyword {
            "DEPEND" => {
                let name = package()?;
                Ok(Command::Depend {
                    name,
                    dependencies: words.map(String::from).collect(),
                })
            }
            "INSTALL" => Ok(Command::Install(package()?)),
            "REMOVE" => Ok(Command::Remove(package()?)),
            "LIST" => Ok(Command::List),
            "END" => Ok(Command::End),
            other => Err(anyhow!("unknown command {}", other)),
        }
    }
}
