use serde_json::from_str;
use serde::Deserialize;
use thiserror::Error;
use anyhow::Context;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

use crate::branch::BranchRef;
use crate::config::App;
use crate::profile;

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const USER_AGENT_HEADER: &str = concat!("git-fixes/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
  #[error("HTTP error: {0}")]
  HttpRequestError(#[from] reqwest::Error),
  #[error("Failed to parse JSON: {0}")]
  JsonParseError(#[from] serde_json::Error),
  #[error("Anyhow error: {0}")]
  Anyhow(#[from] anyhow::Error),
  #[error("Issue tracker error: {0}")]
  TrackerError(String)
}

/// The issue the current branch points at. Read-only; a null or absent body
/// on the wire becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
  pub title: String,
  pub body:  String
}

mod response {
  use super::*;

  #[derive(Debug, Deserialize)]
  pub struct Issue {
    pub title: String,
    pub body:  Option<String>
  }

  #[derive(Debug, Deserialize)]
  pub struct Error {
    pub message: String
  }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Response {
  Issue(response::Issue),
  Error(response::Error)
}

fn issue_url(base_url: &str, reference: &BranchRef) -> String {
  let mut base_url = base_url.to_string();
  if !base_url.ends_with('/') {
    base_url.push('/');
  }

  format!(
    "{}repos/{}/{}/issues/{}",
    base_url, reference.owner, reference.repo, reference.number
  )
}

async fn response(config: &App, reference: &BranchRef) -> Result<Response, FetchError> {
  let access_token = config.access_token()?;
  let url = issue_url(config.api_base_url()?, reference);

  log::debug!("GET {}", url);

  Client::builder()
    .build()?
    .get(&url)
    .bearer_auth(access_token)
    .header(ACCEPT, ACCEPT_HEADER)
    .header(USER_AGENT, USER_AGENT_HEADER)
    .send()
    .await
    .context("Failed to send request")?
    .text()
    .await
    .context("Failed to get response body")
    .and_then(|body| from_str::<Response>(&body).context(format!("Failed to parse response body: {}", body)))
    .map_err(FetchError::from)
}

pub async fn fetch_issue(config: &App, reference: &BranchRef) -> Result<Issue, FetchError> {
  profile!("Fetch issue");

  match response(config, reference).await? {
    Response::Issue(issue) => {
      log::debug!("title: {}", issue.title);
      Ok(Issue {
        title: issue.title,
        body:  issue.body.unwrap_or_default()
      })
    }
    Response::Error(error) => Err(FetchError::TrackerError(error.message))
  }
}
