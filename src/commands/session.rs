//! The command loop: reads lines, runs them against a packager, prints results.

use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

use crate::application::{Notice, Packager};

use super::command::Command;

/// Whether the command loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    End,
}

/// A command loop over one [`Packager`], writing to `out`.
pub struct Session<W: Write> {
    packager: Packager,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(packager: Packager, out: W) -> Self {
        Self { packager, out }
    }

    pub fn packager(&self) -> &Packager {
        &self.packager
    }

    /// Run a single input line.
    ///
    /// Blank lines are ignored. Malformed commands are reported as
    /// `ERROR: ...` and do not stop the session.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!("Rejected input {:?}: {}", line, e);
                writeln!(self.out, "ERROR: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!("Executing {}", command);
        match command {
            Command::Depend { name, dependencies } => {
                self.packager.declare(&name, dependencies);
            }
            Command::Install(name) => {
                let notices = self.packager.install(&name);
                self.print_notices(&notices)?;
            }
            Command::Remove(name) => {
                let removal = self.packager.remove(&name);
                self.print_notices(&removal.notices)?;
            }
            Command::List => {
                for name in self.packager.list() {
                    writeln!(self.out, "\t{}", name)?;
                }
            }
            Command::End => return Ok(Flow::End),
        }

        Ok(Flow::Continue)
    }

    /// Execute lines from `input` until `END` or end of input.
    ///
    /// With `prompt` set, `> ` is written before every read. Bytes that are
    /// not valid UTF-8 are replaced, so such a line is rejected like any
    /// other malformed command.
    #[tracing::instrument(skip(self, input))]
    pub fn run<B: BufRead>(&mut self, mut input: B, prompt: bool) -> Result<Flow> {
        let mut buf = Vec::new();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                if prompt {
                    writeln!(self.out)?;
                }
                return Ok(Flow::Continue);
            }

            let line = String::from_utf8_lossy(&buf);
            if self.execute(&line)? == Flow::End {
                return Ok(Flow::End);
            }
        }
    }

    fn print_notices(&mut self, notices: &[Notice]) -> Result<()> {
        for notice in notices {
            writeln!(self.out, "\t{}", notice)?;
        }
        Ok(())
    }
}
