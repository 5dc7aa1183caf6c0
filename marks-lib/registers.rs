//! Register allocation and register-list ordering.

use std::collections::{
  HashMap,
  HashSet,
};

use crate::mark::Mark;

/// First register in `registers` that no mark occupies.
///
/// `None` means every candidate is taken; the caller decides what to do about
/// that (usually asking the user to free one).
pub fn first_unused_register<T: Mark>(marks: &[T], registers: &[char]) -> Option<char> {
  let used: HashSet<char> = marks.iter().map(Mark::symbol).collect();
  registers.iter().copied().find(|reg| !used.contains(reg))
}

/// Rank of each register in a configured register list.
///
/// A register listed more than once keeps the rank of its first occurrence.
/// Symbols missing from the list rank after every listed one.
#[derive(Debug, Clone, Default)]
pub struct RegisterOrder {
  ranks: HashMap<char, usize>,
}

impl RegisterOrder {
  pub fn new(registers: &[char]) -> Self {
    let mut ranks = HashMap::with_capacity(registers.len());
    for (index, &symbol) in registers.iter().enumerate() {
      ranks.entry(symbol).or_insert(index);
    }
    Self { ranks }
  }

  pub fn rank(&self, symbol: char) -> Option<usize> {
    self.ranks.get(&symbol).copied()
  }

  /// Sort key: listed registers by rank, then everything unlisted.
  pub fn key(&self, symbol: char) -> usize {
    self.rank(symbol).unwrap_or(usize::MAX)
  }

  pub fn contains(&self, symbol: char) -> bool {
    self.ranks.contains_key(&symbol)
  }
}
