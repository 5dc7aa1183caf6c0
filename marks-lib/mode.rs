use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
  #[error("unknown mark mode `{0}` (expected set, goto or delete)")]
  Unknown(String),
}

pub type Result<T> = std::result::Result<T, ModeError>;

/// What the user is about to do with the register they pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Set,
  Goto,
  Delete,
}

impl Mode {
  pub const ALL: [Mode; 3] = [Mode::Set, Mode::Goto, Mode::Delete];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Set => "set",
      Self::Goto => "goto",
      Self::Delete => "delete",
    }
  }

  /// Short label for command palettes.
  pub fn description(self) -> &'static str {
    match self {
      Self::Set => "Set mark",
      Self::Goto => "Go to mark",
      Self::Delete => "Delete mark",
    }
  }

  /// Prompt text while waiting for a register key.
  pub fn placeholder(self) -> &'static str {
    match self {
      Self::Set => "Select a mark to set",
      Self::Goto => "Select a mark to go to",
      Self::Delete => "Select a mark to delete",
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Mode {
  type Err = ModeError;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|mode| mode.as_str() == s)
      .ok_or_else(|| ModeError::Unknown(s.to_owned()))
  }
}

/// Which configured register list an operation works against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegisterSpace {
  #[default]
  Primary,
  Harpoon,
}

impl RegisterSpace {
  pub fn is_harpoon(self) -> bool {
    matches!(self, Self::Harpoon)
  }
}

impl From<bool> for RegisterSpace {
  /// `true` selects the harpoon registers.
  fn from(is_harpoon: bool) -> Self {
    if is_harpoon {
      Self::Harpoon
    } else {
      Self::Primary
    }
  }
}
