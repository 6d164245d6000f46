use anyhow::{bail, Result};
use fixes::filesystem::Filesystem;

pub fn run() -> Result<()> {
  let fs = Filesystem::new()?;
  let hook_file = fs.prepare_commit_msg_path()?;

  if !hook_file.exists() {
    bail!("Hook does not exist at {}", hook_file);
  }

  hook_file.delete()?;
  println!("Hook uninstalled successfully from {}", hook_file);

  Ok(())
}
