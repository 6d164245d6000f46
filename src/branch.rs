use std::fmt;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

// https://help.github.com/articles/autolinked-references-and-urls/#issues-and-pull-requests
pub const FULL_REF_PATTERN: &str = r"^([^/]+)/([^#]+)#(\d+)$";
// TODO: wire the medium and short forms into BranchRef::parse
pub const MEDIUM_REF_PATTERN: &str = r"^([^#]+)#(\d+)$";
pub const SHORT_REF_PATTERN: &str = r"^#(\d+)$";

lazy_static! {
  static ref FULL_REF: Regex = Regex::new(FULL_REF_PATTERN).expect("Failed to compile branch reference pattern");
}

/// An issue reference encoded in a branch name, e.g. `acme/widgets#42`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
  pub owner:  String,
  pub repo:   String,
  pub number: u64
}

impl BranchRef {
  /// Matches a branch name against the fully qualified `owner/repo#number`
  /// form. A branch that does not match is not an error; the caller treats
  /// `None` as "nothing to do".
  pub fn parse(branch: &str) -> Result<Option<Self>> {
    let Some(caps) = FULL_REF.captures(branch) else {
      return Ok(None);
    };

    // The pattern only admits digits here; a failure means the number
    // overflows u64
    let number = caps[3]
      .parse::<u64>()
      .with_context(|| format!("Failed to parse issue number {:?}", &caps[3]))?;

    Ok(Some(Self {
      owner: caps[1].to_string(),
      repo: caps[2].to_string(),
      number
    }))
  }
}

impl fmt::Display for BranchRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
  }
}
