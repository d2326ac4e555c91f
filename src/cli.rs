use crate::config::{ClientConfig, ConfigError, DEFAULT_TIMEOUT_SECS, GITHUB_URL};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "github-stargazers")]
#[command(about = "List the stargazers of a GitHub repository, or check whether a user starred it")]
#[command(version)]
pub struct Cli {
    /// Repository in the form username/repository, e.g. marius92mc/github-stargazers
    pub repository: String,

    /// User name to see if it is a stargazer
    #[arg(long)]
    pub user: Option<String>,

    /// Host serving the stargazers pages
    #[arg(long, env = "STARGAZERS_BASE_URL", default_value = GITHUB_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "STARGAZERS_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print stargazers as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        Ok(ClientConfig::default()
            .with_base_url(&self.base_url)?
            .with_timeout(Duration::from_secs(self.timeout)))
    }
}
