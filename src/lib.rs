pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::process::TokioRunner;
pub use config::CliConfig;
pub use core::launcher::{build_invocation, Launcher};
pub use domain::model::{ExitOutcome, Invocation};
pub use utils::error::{LaunchError, Result};
