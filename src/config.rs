use anyhow::{Context, Result};
use config::Config;
use serde::Deserialize;

/// Issue tracker configuration, read once at startup and handed down to the
/// fetch step. Both values are required by the time a fetch actually happens;
/// the accessors report a missing variable by name.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct App {
  pub access_token: Option<String>,
  pub api_base_url: Option<String>
}

impl App {
  pub fn new() -> Result<Self> {
    dotenv::dotenv().ok();

    let config = Config::builder()
      .add_source(config::Environment::default())
      .build()?;

    config
      .try_deserialize()
      .context("Failed to read configuration from the environment")
  }

  pub fn access_token(&self) -> Result<&str> {
    self
      .access_token
      .as_deref()
      .context("env var ACCESS_TOKEN is required")
  }

  pub fn api_base_url(&self) -> Result<&str> {
    self
      .api_base_url
      .as_deref()
      .context("env var API_BASE_URL is required")
  }
}
