//! The mark record and lookups over a mark list.

use serde::{
  Deserialize,
  Serialize,
};

/// A register label bound to a location.
///
/// Hosts usually carry more data alongside a mark (timestamps, cursor
/// positions). The algebra only reads [`Mark::symbol`] and
/// [`Mark::location`]; whenever it needs a mark with a different symbol or
/// location it derives one from an existing mark through `with_symbol` /
/// `with_location`, so any extra fields survive the edit.
pub trait Mark: Clone {
  fn symbol(&self) -> char;
  fn location(&self) -> &str;

  /// A copy of `self` occupying register `symbol`.
  fn with_symbol(&self, symbol: char) -> Self;

  /// A copy of `self` pointing at `location`.
  fn with_location(&self, location: &str) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BasicMark {
  pub symbol:   char,
  pub location: String,
}

impl BasicMark {
  pub fn new(symbol: char, location: impl Into<String>) -> Self {
    Self {
      symbol,
      location: location.into(),
    }
  }
}

impl Mark for BasicMark {
  fn symbol(&self) -> char {
    self.symbol
  }

  fn location(&self) -> &str {
    &self.location
  }

  fn with_symbol(&self, symbol: char) -> Self {
    Self {
      symbol,
      location: self.location.clone(),
    }
  }

  fn with_location(&self, location: &str) -> Self {
    Self {
      symbol:   self.symbol,
      location: location.to_owned(),
    }
  }
}

/// First mark in list order occupying `symbol`.
pub fn mark_by_symbol<T: Mark>(marks: &[T], symbol: char) -> Option<&T> {
  marks.iter().find(|m| m.symbol() == symbol)
}

/// Position of the first mark with the same symbol and location as `mark`.
pub(crate) fn position_of<T: Mark>(marks: &[T], mark: &impl Mark) -> Option<usize> {
  marks
    .iter()
    .position(|m| m.symbol() == mark.symbol() && m.location() == mark.location())
}

/// True when a mark with both the same symbol and the same location exists.
pub fn contains_mark<T: Mark>(marks: &[T], mark: &impl Mark) -> bool {
  position_of(marks, mark).is_some()
}

pub fn contains_symbol<T: Mark>(marks: &[T], symbol: char) -> bool {
  marks.iter().any(|m| m.symbol() == symbol)
}

pub fn contains_location<T: Mark>(marks: &[T], location: &str) -> bool {
  marks.iter().any(|m| m.location() == location)
}
