//! Register configuration supplied by the host.

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::mode::RegisterSpace;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
  #[error("{list} contains {symbol:?}, which cannot be used as a register")]
  InvalidRegister { list: &'static str, symbol: char },
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// Two independent register spaces: the primary one and the smaller harpoon
/// one. Each register list is a string with one register per `char`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct RegisterSettings {
  pub register_list:                 String,
  pub register_sort_by_list:         bool,
  pub harpoon_register_list:         String,
  pub harpoon_register_sort_by_list: bool,
  pub harpoon_register_gap_removal:  bool,
}

impl Default for RegisterSettings {
  fn default() -> Self {
    Self {
      register_list:                 "abcdefghijklmnopqrstuvwxyz".into(),
      register_sort_by_list:         true,
      harpoon_register_list:         "qwer".into(),
      harpoon_register_sort_by_list: true,
      harpoon_register_gap_removal:  true,
    }
  }
}

impl RegisterSettings {
  fn list(&self, space: RegisterSpace) -> &str {
    match space {
      RegisterSpace::Primary => &self.register_list,
      RegisterSpace::Harpoon => &self.harpoon_register_list,
    }
  }

  pub fn registers(&self, space: RegisterSpace) -> Vec<char> {
    self.list(space).chars().collect()
  }

  pub fn sort_by_list(&self, space: RegisterSpace) -> bool {
    match space {
      RegisterSpace::Primary => self.register_sort_by_list,
      RegisterSpace::Harpoon => self.harpoon_register_sort_by_list,
    }
  }

  /// Registers that appear more than once in the list for `space`, in order
  /// of their second appearance.
  pub fn duplicate_registers(&self, space: RegisterSpace) -> Vec<char> {
    let mut seen = Vec::new();
    let mut duplicates = Vec::new();
    for symbol in self.list(space).chars() {
      if seen.contains(&symbol) {
        if !duplicates.contains(&symbol) {
          duplicates.push(symbol);
        }
      } else {
        seen.push(symbol);
      }
    }
    duplicates
  }

  /// Rejects register lists containing whitespace or control characters.
  ///
  /// Empty lists are fine: every operation then simply finds no registers.
  pub fn validate(&self) -> Result<()> {
    for (list, registers) in [
      ("register-list", &self.register_list),
      ("harpoon-register-list", &self.harpoon_register_list),
    ] {
      if let Some(symbol) = registers
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
      {
        return Err(SettingsError::InvalidRegister { list, symbol });
      }
    }
    Ok(())
  }
}
