//! Presentation order for mark lists.
//!
//! [`sort_by_register_order`] and [`sort_alphabetically`] permute the slice
//! they are given. [`sorted_and_filtered`] leaves its input alone and returns
//! a sorted copy.

use std::{
  cmp::Ordering,
  iter,
};

use unicode_normalization::UnicodeNormalization;

use crate::{
  mark::Mark,
  mode::RegisterSpace,
  registers::RegisterOrder,
  settings::RegisterSettings,
};

/// Sorts in place by each symbol's position in `registers`.
///
/// Marks whose symbol is not listed go last, keeping their relative order.
pub fn sort_by_register_order<T: Mark>(marks: &mut [T], registers: &[char]) {
  let order = RegisterOrder::new(registers);
  marks.sort_by_key(|m| order.key(m.symbol()));
}

/// Sorts in place by symbol using root-locale style collation: punctuation,
/// then symbols, numbers and letters, accents and case breaking ties.
pub fn sort_alphabetically<T: Mark>(marks: &mut [T]) {
  marks.sort_by(|a, b| compare_symbols(a.symbol(), b.symbol()));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
  Other,
  Punctuation,
  Symbol,
  Currency,
  Number,
  Letter,
}

fn tier(c: char) -> Tier {
  use unicode_general_category::{
    GeneralCategory,
    get_general_category,
  };

  match get_general_category(c) {
    GeneralCategory::ConnectorPunctuation
    | GeneralCategory::DashPunctuation
    | GeneralCategory::OpenPunctuation
    | GeneralCategory::ClosePunctuation
    | GeneralCategory::InitialPunctuation
    | GeneralCategory::FinalPunctuation
    | GeneralCategory::OtherPunctuation => Tier::Punctuation,
    GeneralCategory::MathSymbol | GeneralCategory::ModifierSymbol | GeneralCategory::OtherSymbol => {
      Tier::Symbol
    },
    GeneralCategory::CurrencySymbol => Tier::Currency,
    GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber => {
      Tier::Number
    },
    GeneralCategory::UppercaseLetter
    | GeneralCategory::LowercaseLetter
    | GeneralCategory::TitlecaseLetter
    | GeneralCategory::ModifierLetter
    | GeneralCategory::OtherLetter => Tier::Letter,
    _ => Tier::Other,
  }
}

/// Base character of `c` with diacritics removed and case folded.
fn base(c: char) -> char {
  let first = iter::once(c).nfd().next().unwrap_or(c);
  first.to_lowercase().next().unwrap_or(first)
}

/// Combining marks `c` decomposes into, in canonical order.
fn accents(c: char) -> impl Iterator<Item = char> {
  iter::once(c).nfd().skip(1)
}

/// Root-locale style collation of two register symbols.
///
/// Whitespace and controls come first, then punctuation, symbols, currency,
/// numbers and letters. Within a class symbols compare by base character,
/// then unaccented before accented, then lowercase before uppercase
/// (`e < E < é < É < f`). Code point order breaks any remaining tie.
fn compare_symbols(a: char, b: char) -> Ordering {
  tier(a)
    .cmp(&tier(b))
    .then_with(|| base(a).cmp(&base(b)))
    .then_with(|| accents(a).cmp(accents(b)))
    .then_with(|| b.is_lowercase().cmp(&a.is_lowercase()))
    .then_with(|| a.cmp(&b))
}

/// Marks belonging to `space`, sorted the way `settings` asks for.
///
/// Returns a new list; `marks` is not touched.
pub fn sorted_and_filtered<T: Mark>(
  marks: &[T],
  space: RegisterSpace,
  settings: &RegisterSettings,
) -> Vec<T> {
  let registers = settings.registers(space);
  let order = RegisterOrder::new(&registers);
  let mut filtered: Vec<T> = marks
    .iter()
    .filter(|m| order.contains(m.symbol()))
    .cloned()
    .collect();

  if settings.sort_by_list(space) {
    filtered.sort_by_key(|m| order.key(m.symbol()));
  } else {
    sort_alphabetically(&mut filtered);
  }
  filtered
}

#[cfg(test)]
mod tests {
  use quickcheck::quickcheck;

  use super::*;
  use crate::mark::{
    BasicMark,
    tests::{
      fixture,
      marks,
      symbols,
    },
  };

  fn settings() -> RegisterSettings {
    RegisterSettings {
      register_list: "ABCDE".into(),
      register_sort_by_list: true,
      harpoon_register_list: "BDF".into(),
      harpoon_register_sort_by_list: false,
      harpoon_register_gap_removal: true,
    }
  }

  #[test]
  fn sorts_by_custom_register_order() {
    let mut ms = marks(&[('C', "fileC.md"), ('A', "fileA.md"), ('B', "fileB.md")]);
    sort_by_register_order(&mut ms, &['B', 'A', 'C']);
    assert_eq!(symbols(&ms), "BAC");
  }

  #[test]
  fn unlisted_symbols_sort_last_in_original_order() {
    let mut ms = marks(&[('z', "1"), ('B', "2"), ('y', "3"), ('A', "4")]);
    sort_by_register_order(&mut ms, &['A', 'B']);
    assert_eq!(symbols(&ms), "ABzy");
  }

  #[test]
  fn duplicate_register_uses_first_position() {
    let mut ms = marks(&[('A', "a"), ('B', "b")]);
    sort_by_register_order(&mut ms, &['B', 'A', 'B']);
    assert_eq!(symbols(&ms), "BA");
  }

  #[test]
  fn sorts_alphabetically() {
    let mut ms = fixture();
    sort_alphabetically(&mut ms);
    assert_eq!(symbols(&ms), "ABCE");

    let mut ms = marks(&[('B', "1"), ('a', "2"), ('b', "3"), ('A', "4"), ('1', "5")]);
    sort_alphabetically(&mut ms);
    assert_eq!(symbols(&ms), "1aAbB");
  }

  #[test]
  fn punctuation_and_accents_sort_like_a_collator() {
    let mut ms = marks(&[('f', "1"), ('é', "2"), ('e', "3"), ('1', "4"), (';', "5"), ('~', "6")]);
    sort_alphabetically(&mut ms);
    assert_eq!(symbols(&ms), ";~1eéf");

    let mut ms = marks(&[('É', "1"), ('E', "2"), ('é', "3"), ('e', "4"), ('$', "5"), ('z', "6")]);
    sort_alphabetically(&mut ms);
    assert_eq!(symbols(&ms), "$eEéÉz");
  }

  #[test]
  fn filters_by_available_registers() {
    let ms = marks(&[('A', "fileA.md"), ('F', "fileF.md")]);
    let filtered = sorted_and_filtered(&ms, RegisterSpace::Primary, &settings());
    assert_eq!(filtered, vec![BasicMark::new('A', "fileA.md")]);
  }

  #[test]
  fn sorts_by_register_list_when_enabled() {
    let ms = marks(&[('C', "fileC.md"), ('A', "fileA.md"), ('B', "fileB.md")]);
    let settings = RegisterSettings {
      register_list: "CBA".into(),
      ..settings()
    };
    let sorted = sorted_and_filtered(&ms, RegisterSpace::Primary, &settings);
    assert_eq!(symbols(&sorted), "CBA");
    assert_eq!(symbols(&ms), "CAB");
  }

  #[test]
  fn sorts_alphabetically_when_list_order_disabled() {
    let ms = marks(&[('C', "fileC.md"), ('A', "fileA.md"), ('B', "fileB.md")]);
    let settings = RegisterSettings {
      harpoon_register_list: "CBA".into(),
      ..settings()
    };
    let sorted = sorted_and_filtered(&ms, RegisterSpace::Harpoon, &settings);
    assert_eq!(symbols(&sorted), "ABC");
  }

  #[test]
  fn empty_register_list_yields_nothing() {
    let settings = RegisterSettings {
      register_list: String::new(),
      ..settings()
    };
    assert!(sorted_and_filtered(&fixture(), RegisterSpace::Primary, &settings).is_empty());
  }

  fn to_marks(symbols: &[u8]) -> Vec<BasicMark> {
    symbols
      .iter()
      .enumerate()
      .map(|(i, b)| BasicMark::new(char::from(b'A' + b % 8), i.to_string()))
      .collect()
  }

  quickcheck! {
      fn filtered_marks_stay_in_register_space(raw: Vec<u8>, harpoon: bool) -> bool {
          let ms = to_marks(&raw);
          let space = RegisterSpace::from(harpoon);
          let settings = settings();
          let registers = settings.registers(space);
          sorted_and_filtered(&ms, space, &settings)
              .iter()
              .all(|m| registers.contains(&m.symbol))
      }

      fn register_sort_is_idempotent(raw: Vec<u8>) -> bool {
          let mut once = to_marks(&raw);
          sort_by_register_order(&mut once, &['D', 'B', 'F', 'A']);
          let mut twice = once.clone();
          sort_by_register_order(&mut twice, &['D', 'B', 'F', 'A']);
          once == twice
      }

      fn alphabetical_sort_is_idempotent(raw: Vec<u8>) -> bool {
          let mut once = to_marks(&raw);
          sort_alphabetically(&mut once);
          let mut twice = once.clone();
          sort_alphabetically(&mut twice);
          once == twice
      }
  }
}
