use std::path::{Path, PathBuf};
use std::{env, fs};
use std::os::unix::fs::symlink as symlink_unix;

use anyhow::{bail, Context, Result};
use git2::{Repository, RepositoryOpenFlags as Flags};

use crate::profile;

const ERR_CURRENT_DIR: &str = "Failed to get current directory";
const HOOK_BIN: &str = "git-fixes-hook";

/// Paths the installer cares about: the hook binary shipped next to the
/// `git-fixes` executable, and the repository's hooks directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
  hook_bin_path:  PathBuf,
  git_hooks_path: PathBuf
}

#[derive(Debug, Clone)]
pub struct File {
  path: PathBuf
}

impl File {
  pub fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub fn exists(&self) -> bool {
    self.path.exists()
  }

  pub fn delete(&self) -> Result<()> {
    profile!("Delete file");
    log::debug!("Removing file at {}", self);
    fs::remove_file(&self.path).with_context(|| format!("Failed to remove file at {}", self))
  }

  pub fn symlink(&self, target: &File) -> Result<()> {
    profile!("Create symlink");
    log::debug!("Symlinking {} to {}", target, self);
    symlink_unix(&target.path, &self.path).with_context(|| format!("Failed to symlink {} to {}", target, self))
  }

  /// Path relative to the current directory, for display purposes.
  pub fn relative_path(&self) -> Result<Dir> {
    let current_dir = env::current_dir().context(ERR_CURRENT_DIR)?;
    let relative = self
      .path
      .strip_prefix(&current_dir)
      .with_context(|| format!("Failed to strip prefix from {}", self.path.display()))?;

    Ok(Dir::new(relative.to_path_buf()))
  }

  pub fn parent(&self) -> Dir {
    Dir::new(self.path.parent().unwrap_or(Path::new("")).to_path_buf())
  }
}

impl From<&File> for Dir {
  fn from(file: &File) -> Self {
    file.parent()
  }
}

impl std::fmt::Display for File {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let path = self.relative_path().unwrap_or_else(|_| self.into());
    write!(f, "{}", path.path.display())
  }
}

#[derive(Debug, Clone)]
pub struct Dir {
  path: PathBuf
}

impl Dir {
  pub fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub fn exists(&self) -> bool {
    self.path.exists()
  }

  pub fn create_dir_all(&self) -> Result<()> {
    profile!("Create directory recursively");
    log::debug!("Creating directory at {}", self);
    fs::create_dir_all(&self.path).with_context(|| format!("Failed to create directory at {}", self))
  }
}

impl std::fmt::Display for Dir {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.path.display())
  }
}

impl Filesystem {
  pub fn new() -> Result<Self> {
    profile!("Initialize filesystem");

    let current_dir = env::current_dir().context(ERR_CURRENT_DIR)?;
    let cli_bin_path = env::current_exe().context("Failed to get current executable")?;

    let repo = Repository::open_ext(&current_dir, Flags::empty(), Vec::<&Path>::new())
      .with_context(|| format!("Failed to open repository at {}", current_dir.display()))?;

    // repo.path() may be relative when discovered from a subdirectory
    let mut git_path = repo.path().to_path_buf();
    if git_path.is_relative() {
      git_path = current_dir.join(git_path);
    }

    let hook_bin_path = cli_bin_path
      .parent()
      .with_context(|| format!("Failed to get parent directory of {}", cli_bin_path.display()))?
      .join(HOOK_BIN);

    if !hook_bin_path.exists() {
      bail!("Hook binary not found at {}", hook_bin_path.display());
    }

    Ok(Self {
      hook_bin_path,
      git_hooks_path: git_path.join("hooks")
    })
  }

  pub fn hook_bin_path(&self) -> File {
    File::new(self.hook_bin_path.clone())
  }

  pub fn git_hooks_path(&self) -> Dir {
    Dir::new(self.git_hooks_path.clone())
  }

  pub fn prepare_commit_msg_path(&self) -> Result<File> {
    if !self.git_hooks_path.exists() {
      bail!("Hooks directory not found at {}", self.git_hooks_path.display());
    }

    Ok(File::new(self.git_hooks_path.join("prepare-commit-msg")))
  }
}
