//! Setting, deleting and restoring marks.
//!
//! All three operations return a new list and leave the input untouched. Each
//! one removes every mark occupying the affected register before adding the
//! replacement, so the result holds at most one mark for that register even
//! if the input did not.

use crate::mark::Mark;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOutcome<T> {
  pub marks:       Vec<T>,
  /// The mark that previously held the register, if any.
  pub overwritten: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome<T> {
  pub marks:   Vec<T>,
  pub deleted: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome<T> {
  pub marks:     Vec<T>,
  /// Whatever occupied the register before the restore.
  pub discarded: Option<T>,
}

/// Points `set_mark`'s register at `location`, replacing any mark already
/// there.
///
/// The new mark is derived from `set_mark`, so fields other than the location
/// are taken from it.
pub fn set_or_overwrite<T: Mark>(marks: &[T], set_mark: &T, location: &str) -> SetOutcome<T> {
  let DeleteOutcome {
    mut marks,
    deleted: overwritten,
  } = delete(marks, set_mark.symbol());

  if let Some(old) = &overwritten {
    tracing::debug!(
      "overwriting mark {} ({} -> {location})",
      old.symbol(),
      old.location()
    );
  }
  marks.push(set_mark.with_location(location));
  SetOutcome { marks, overwritten }
}

/// Removes the mark occupying `symbol`. Locations are not compared.
pub fn delete<T: Mark>(marks: &[T], symbol: char) -> DeleteOutcome<T> {
  let deleted = marks.iter().find(|m| m.symbol() == symbol).cloned();
  let marks = marks
    .iter()
    .filter(|m| m.symbol() != symbol)
    .cloned()
    .collect();
  DeleteOutcome { marks, deleted }
}

/// Puts `last_changed` back into its register exactly as given, undoing an
/// edit in progress.
pub fn restore_last_changed<T: Mark>(marks: &[T], last_changed: &T) -> RestoreOutcome<T> {
  let DeleteOutcome {
    mut marks,
    deleted: discarded,
  } = delete(marks, last_changed.symbol());

  if let Some(discarded) = &discarded {
    tracing::debug!(
      "restoring mark {} to {}, discarding {}",
      last_changed.symbol(),
      last_changed.location(),
      discarded.location()
    );
  }
  marks.push(last_changed.clone());
  RestoreOutcome { marks, discarded }
}
