//! Harpoon register space.
//!
//! Harpoon marks live in a short, ordered register list. With gap removal
//! enabled the occupied registers always form a prefix of that list: freeing
//! one slides every later mark down by one.

use crate::{
  edit::{
    self,
    DeleteOutcome,
    SetOutcome,
  },
  mark::Mark,
  mode::RegisterSpace,
  registers::first_unused_register,
  settings::RegisterSettings,
};

/// Moves harpoon marks down into free registers so the occupied ones are
/// contiguous from the start of `harpoon_registers`.
///
/// Marks keep their relative register order and every field except the
/// symbol. Marks outside `harpoon_registers` are untouched. Returns a new
/// list.
pub fn remove_gaps<T: Mark>(marks: &[T], harpoon_registers: &[char]) -> Vec<T> {
  let mut marks = marks.to_vec();
  let mut left = 0;

  for &target in harpoon_registers {
    let Some(mark) = marks.iter().find(|m| m.symbol() == target).cloned() else {
      continue;
    };
    let slot = harpoon_registers[left];
    if slot != target {
      tracing::trace!("harpoon mark {target} ({}) moves to {slot}", mark.location());
    }
    marks.retain(|m| m.symbol() != slot);
    marks.push(mark.with_symbol(slot));
    left += 1;
  }

  let vacated = &harpoon_registers[left..];
  marks.retain(|m| !vacated.contains(&m.symbol()));
  marks
}

/// Puts `template`'s location into the first free harpoon register.
///
/// The new mark is derived from `template`, keeping its location and host
/// fields; its symbol is ignored and replaced by the allocated register.
/// `None` when every harpoon register is taken.
pub fn add<T: Mark>(
  marks: &[T],
  template: &T,
  settings: &RegisterSettings,
) -> Option<SetOutcome<T>> {
  let registers = settings.registers(RegisterSpace::Harpoon);
  let symbol = first_unused_register(marks, &registers)?;
  Some(edit::set_or_overwrite(
    marks,
    &template.with_symbol(symbol),
    template.location(),
  ))
}

/// Deletes the harpoon mark in `symbol`, compacting the remaining harpoon
/// marks when gap removal is enabled.
pub fn delete<T: Mark>(marks: &[T], symbol: char, settings: &RegisterSettings) -> DeleteOutcome<T> {
  let DeleteOutcome { marks, deleted } = edit::delete(marks, symbol);
  let marks = if settings.harpoon_register_gap_removal {
    remove_gaps(&marks, &settings.registers(RegisterSpace::Harpoon))
  } else {
    marks
  };
  DeleteOutcome { marks, deleted }
}
