use std::os::unix::process::ExitStatusExt;
use std::process::Stdio;

use async_trait::async_trait;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tokio::process::Command;
use tokio::signal::unix::{signal, SignalKind};

use crate::domain::model::{ExitOutcome, Invocation};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{LaunchError, Result};

/// Runs the handoff with `tokio::process`. Standard streams are inherited
/// so the external program owns them directly, and SIGINT/SIGTERM received
/// by the launcher are relayed to the child, approximating `exec` semantics
/// without a process-image replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

impl TokioRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExitOutcome> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => LaunchError::ProgramNotFound {
                    program: invocation.program.clone(),
                },
                _ => LaunchError::SpawnError {
                    program: invocation.program.clone(),
                    source: e,
                },
            })?;

        // Present as long as the child has not been reaped yet.
        let pid = child.id();
        tracing::debug!(program = %invocation.program, ?pid, "Spawned external program");

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        loop {
            tokio::select! {
                status = child.wait() => {
                    return Ok(decode_status(status?));
                }
                _ = sigint.recv() => {
                    relay_signal(pid, Signal::SIGINT);
                }
                _ = sigterm.recv() => {
                    relay_signal(pid, Signal::SIGTERM);
                }
            }
        }
    }
}

fn relay_signal(pid: Option<u32>, sig: Signal) {
    let Some(pid) = pid else {
        tracing::warn!(?sig, "Child already reaped, dropping signal");
        return;
    };

    match kill(Pid::from_raw(pid as i32), sig) {
        Ok(()) => tracing::debug!(?sig, pid, "Relayed signal to child"),
        Err(error) => tracing::warn!(?error, ?sig, pid, "Failed to relay signal to child"),
    }
}

fn decode_status(status: std::process::ExitStatus) -> ExitOutcome {
    match status.code() {
        Some(code) => ExitOutcome::Exited(code),
        // On unix a None code means termination by signal.
        None => ExitOutcome::Signaled(status.signal().unwrap_or(0)),
    }
}
