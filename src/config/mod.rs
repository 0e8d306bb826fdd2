use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_program_name, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALERTER_TYPE: &str = "TELEGRAM";
pub const DEFAULT_PROGRAM: &str = "discogs_alert";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "discogs-launch")]
#[command(about = "Launch discogs_alert with credentials taken from the environment")]
pub struct CliConfig {
    /// Discogs personal access token, forwarded as `-dt`
    #[arg(long, short = 't', env = "DISCOGS_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Discogs list id to monitor, forwarded as `--list-id`
    #[arg(long, env = "DISCOGS_LIST")]
    pub list_id: String,

    /// Notification channel, forwarded as `--alerter-type`
    #[arg(long, default_value = DEFAULT_ALERTER_TYPE)]
    pub alerter_type: String,

    /// External program to hand off to
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub program: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn token(&self) -> &str {
        &self.token
    }

    fn list_id(&self) -> &str {
        &self.list_id
    }

    fn alerter_type(&self) -> &str {
        &self.alerter_type
    }

    fn program(&self) -> &str {
        &self.program
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("token", &self.token)?;
        validate_non_empty_string("list_id", &self.list_id)?;
        validate_non_empty_string("alerter_type", &self.alerter_type)?;
        validate_program_name("program", &self.program)?;
        Ok(())
    }
}
