//! External command execution
//!
//! Collaborator tools run with stdio detached; only their exit status is
//! reported back. There is no timeout: a hung tool hangs the caller.

use crate::error::{Error, Result};
use crate::generate::Progress;
use camino::{Utf8Path, Utf8PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Fail with `ExternalCommand` if `program` cannot be found on PATH
pub fn require_tool(program: &str) -> Result<()> {
    match which::which(program) {
        Ok(path) => {
            tracing::debug!("Found {} at {}", program, path.display());
            Ok(())
        }
        Err(_) => Err(Error::external_command(
            format!("locate {}", program),
            program,
            "was not found in PATH",
        )),
    }
}

/// One invocation of a collaborator tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    current_dir: Option<Utf8PathBuf>,
    action: String,
}

impl ExternalCommand {
    /// `action` names the step in error messages, e.g. "initialize go module"
    pub fn new(program: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            action: action.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Utf8Path) -> Self {
        self.current_dir = Some(dir.to_owned());
        self
    }

    /// Command line as shown in messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion and map a spawn failure or non-zero exit to an error
    pub async fn run(&self) -> Result<()> {
        tracing::debug!("Running: {}", self.display());

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|e| {
            Error::external_command(&self.action, self.display(), format!("could not be started: {}", e))
        })?;

        if !status.success() {
            return Err(Error::external_command(
                &self.action,
                self.display(),
                format!("failed with {}", status),
            ));
        }

        tracing::debug!("Command succeeded: {}", self.display());
        Ok(())
    }

    /// Run on a background task while the caller keeps redrawing progress
    ///
    /// The task reports its result through a one-shot channel. This loop
    /// checks the channel once per tick and otherwise ticks `progress` and
    /// sleeps for `interval`.
    pub async fn run_with_progress(&self, progress: &dyn Progress, interval: Duration) -> Result<()> {
        let (done_tx, mut done_rx) = oneshot::channel();
        let command = self.clone();

        tokio::spawn(async move {
            let result = command.run().await;
            // The receiver only goes away if the caller was dropped mid-wait
            let _ = done_tx.send(result);
        });

        loop {
            match done_rx.try_recv() {
                Ok(result) => return result,
                Err(TryRecvError::Empty) => {
                    progress.tick();
                    tokio::time::sleep(interval).await;
                }
                Err(TryRecvError::Closed) => {
                    return Err(Error::external_command(
                        &self.action,
                        self.display(),
                        "ended without reporting a result",
                    ));
                }
            }
        }
    }
}
