pub mod launcher;

pub use crate::domain::model::{ExitOutcome, Invocation};
pub use crate::domain::ports::{ConfigProvider, ProcessRunner};
pub use crate::utils::error::Result;
