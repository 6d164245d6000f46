// Hook: prepare-commit-msg

use std::io::{Read, Write};
use std::path::PathBuf;
use std::fs::File;

use git2::Repository;
use anyhow::{Context, Result};
use thiserror::Error;
use clap::Parser;

use crate::branch::BranchRef;
use crate::config::App;
use crate::github::{self, FetchError, Issue};
use crate::profile;

// Message sources git hands to a prepare-commit-msg hook. Only "template"
// invocations rewrite the message file.
pub const SOURCE_COMMIT: &str = "commit";
pub const SOURCE_TEMPLATE: &str = "template";
pub const SOURCE_MERGE: &str = "merge";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
  pub commit_msg_file: PathBuf,

  #[clap(required = false)]
  pub source: Option<String>,

  #[clap(required = false)]
  pub sha1: Option<String>
}

#[derive(Error, Debug)]
pub enum HookError {
  #[error(transparent)]
  Fetch(#[from] FetchError),

  #[error(transparent)]
  Anyhow(#[from] anyhow::Error)
}

pub trait FilePath {
  fn is_empty(&self) -> Result<bool> {
    self.read().map(|s| s.is_empty())
  }

  fn write(&self, msg: String) -> Result<()>;
  fn read(&self) -> Result<String>;
}

impl FilePath for PathBuf {
  fn write(&self, msg: String) -> Result<()> {
    let mut file = File::create(self)?;
    file.write_all(msg.as_bytes())?;
    Ok(())
  }

  fn read(&self) -> Result<String> {
    let mut file = File::open(self)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
  }
}

pub async fn run(args: &Args) -> Result<(), HookError> {
  log::debug!(
    "file: {:?}, source: {:?}, sha1: {:?}",
    args.commit_msg_file,
    args.source,
    args.sha1
  );

  // Amended commits and merges arrive with a different source; a plain
  // `git commit` passes none at all
  if args.source.as_deref() != Some(SOURCE_TEMPLATE) {
    log::info!("source is not {:?}; nothing to do", SOURCE_TEMPLATE);
    return Ok(());
  }

  let Some(branch) = current_branch() else {
    log::info!("cannot determine current branch; nothing to do");
    return Ok(());
  };

  let Some(reference) = BranchRef::parse(&branch)? else {
    log::info!("branch {:?} does not reference an issue; nothing to do", branch);
    return Ok(());
  };

  let config = App::new().context("Failed to load configuration")?;
  let issue = github::fetch_issue(&config, &reference).await?;

  let template = args
    .commit_msg_file
    .read()
    .context("Failed to read commit message file")?;

  args
    .commit_msg_file
    .write(compose(&issue, &reference, &template))
    .context("Failed to write commit message")?;

  Ok(())
}

/// Resolves the branch HEAD currently points at. Any failure (no repository,
/// unborn or detached HEAD) means the hook has nothing to key on, so the
/// caller skips instead of failing the commit.
fn current_branch() -> Option<String> {
  profile!("Resolve current branch");

  let repo = match Repository::open_from_env() {
    Ok(repo) => repo,
    Err(e) => {
      log::warn!("Failed to open repository: {}", e);
      return None;
    }
  };

  let head = match repo.head() {
    Ok(head) => head,
    Err(e) => {
      log::warn!("Failed to resolve HEAD: {}", e);
      return None;
    }
  };

  if !head.is_branch() {
    log::info!("HEAD is not a branch");
    return None;
  }

  head.shorthand().map(ToOwned::to_owned)
}

/// Builds the new commit message: issue title, a `Fixes` trailer pointing
/// back at the branch reference, the issue body as comment lines, then the
/// original template verbatim. Running the hook twice doubles the header;
/// git strips the comment lines either way.
pub fn compose(issue: &Issue, reference: &BranchRef, template: &str) -> String {
  let mut message = String::with_capacity(issue.title.len() + issue.body.len() + template.len() + 64);

  message.push_str(&issue.title);
  message.push_str("\n\n");
  message.push_str(&format!("Fixes {}\n\n", reference));

  for line in issue.body.split('\n') {
    message.push_str("# ");
    message.push_str(line);
    message.push('\n');
  }

  message.push_str(template);
  message
}
