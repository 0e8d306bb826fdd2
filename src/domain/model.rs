use serde::{Deserialize, Serialize};

/// A fully resolved handoff: which program to run and the exact argument
/// vector it receives. Building one is pure, so the same configuration
/// always yields the same invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// How the external program ended after the handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal termination with the given exit code.
    Exited(i32),
    /// Killed by the given signal number.
    Signaled(i32),
}

impl ExitOutcome {
    /// Exit code the launcher itself should terminate with: the child's own
    /// code, or 128 + signal number following shell convention.
    pub fn launcher_code(self) -> i32 {
        match self {
            ExitOutcome::Exited(code) => code,
            ExitOutcome::Signaled(signal) => 128 + signal,
        }
    }

    pub fn success(self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}
