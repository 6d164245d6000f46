mod install;
mod uninstall;

use anyhow::Result;
use dotenv::dotenv;
use clap::Command;

fn cli() -> Command {
  Command::new("git-fixes")
    .about("Prefills commit messages from the issue referenced by the current branch")
    .subcommand_required(true)
    .arg_required_else_help(true)
    .subcommand(Command::new("install").about("Installs the git-fixes hook"))
    .subcommand(Command::new("uninstall").about("Uninstalls the git-fixes hook"))
}

fn main() -> Result<()> {
  env_logger::init();
  dotenv().ok();

  match cli().get_matches().subcommand() {
    Some(("install", _)) => install::run(),
    Some(("uninstall", _)) => uninstall::run(),
    _ => Ok(())
  }
}
