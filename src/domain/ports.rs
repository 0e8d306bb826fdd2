use crate::domain::model::{ExitOutcome, Invocation};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn token(&self) -> &str;
    fn list_id(&self) -> &str;
    fn alerter_type(&self) -> &str;
    fn program(&self) -> &str;
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ExitOutcome>;
}
