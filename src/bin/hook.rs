// Hook: prepare-commit-msg

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;
use anyhow::{Context, Result};
use fixes::hook::{Args, SOURCE_TEMPLATE};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  // Only template invocations reach the network; no spinner otherwise
  let pb = if args.source.as_deref() == Some(SOURCE_TEMPLATE) {
    let style = ProgressStyle::default_spinner()
      .tick_strings(&["-", "\\", "|", "/"])
      .template("{spinner:.blue} {msg}")
      .context("Failed to create progress bar style")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message("Fetching issue details...");
    pb.enable_steady_tick(Duration::from_millis(150));
    Some(pb)
  } else {
    None
  };

  let result = fixes::hook::run(&args).await;

  if let Some(pb) = pb {
    pb.finish_and_clear();
  }

  Ok(result?)
}
