use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Program not found: {program}")]
    ProgramNotFound { program: String },

    #[error("Failed to spawn {program}: {source}")]
    SpawnError {
        program: String,
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LaunchError {
    /// Exit code the launcher terminates with when the handoff itself fails
    /// (shell convention: 127 not found, 126 not executable, 2 bad usage).
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ProgramNotFound { .. } => 127,
            LaunchError::SpawnError { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                126
            }
            LaunchError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LaunchError::ProgramNotFound { program } => {
                format!("Program not found: {program}. Is it installed and on PATH?")
            }
            LaunchError::SpawnError { program, source } => {
                format!("Could not start {program}: {source}")
            }
            LaunchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {field}: {reason}")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
