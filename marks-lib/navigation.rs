//! Stepping through marks in register order.
//!
//! Both directions order a copy of the list by `registers` and locate the
//! current mark by symbol and location in that copy; the neighbour is taken
//! from the same sorted copy.

use crate::{
  mark::{
    Mark,
    position_of,
  },
  sort::sort_by_register_order,
};

fn sorted_with_position<T: Mark>(
  marks: &[T],
  registers: &[char],
  current: &T,
) -> Option<(Vec<T>, usize)> {
  let mut sorted = marks.to_vec();
  sort_by_register_order(&mut sorted, registers);
  let index = position_of(&sorted, current)?;
  Some((sorted, index))
}

/// The mark after `current`, or `None` if `current` is last or not present.
pub fn next<T: Mark>(marks: &[T], registers: &[char], current: &T) -> Option<T> {
  let (mut sorted, index) = sorted_with_position(marks, registers, current)?;
  if index + 1 >= sorted.len() {
    return None;
  }
  Some(sorted.swap_remove(index + 1))
}

/// The mark before `current`, or `None` if `current` is first or not present.
pub fn previous<T: Mark>(marks: &[T], registers: &[char], current: &T) -> Option<T> {
  let (mut sorted, index) = sorted_with_position(marks, registers, current)?;
  let index = index.checked_sub(1)?;
  Some(sorted.swap_remove(index))
}
