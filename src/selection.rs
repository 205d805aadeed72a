use super::*;

/// Owns the set of selected values. Only the operations below mutate
/// it; callers receive fresh snapshots, never a live reference they
/// could observe mid-update. Whether `multiple` is allowed is fixed at
/// construction time.
#[derive(Clone, Debug)]
pub struct Selection {
  multiple: bool,
  values: Vec<Value>,
}

impl Selection {
  pub fn deselect_all(&mut self) {
    self.values.clear();
  }

  /// True iff the visible non-disabled set is non-empty and fully
  /// selected. Drives the select-all control's toggle semantics.
  pub fn is_all_selected(&self, visible: &[&SelectOption]) -> bool {
    let selectable: Vec<&&SelectOption> =
      visible.iter().filter(|option| !option.disabled).collect();

    !selectable.is_empty()
      && selectable
        .iter()
        .all(|option| self.is_selected(&option.value))
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn is_selected(&self, value: &Value) -> bool {
    self.values.contains(value)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// The externally supplied current selection is copied in; in
  /// single-select mode anything past the first value is dropped so the
  /// size-at-most-one invariant holds from the start.
  pub fn new(multiple: bool, mut initial: Vec<Value>) -> Self {
    if !multiple {
      initial.truncate(1);
    }

    Self {
      multiple,
      values: initial,
    }
  }

  /// Replaces the set with the values of the visible non-disabled
  /// options, discarding any prior selection. Scoped to the current
  /// filter result, not the full option universe. No-op in single
  /// mode.
  pub fn select_all(&mut self, visible: &[&SelectOption]) {
    if !self.multiple {
      return;
    }

    self.values = visible
      .iter()
      .filter(|option| !option.disabled)
      .map(|option| option.value.clone())
      .collect();
  }

  pub fn snapshot(&self) -> Vec<Value> {
    self.values.clone()
  }

  /// Multi mode adds or removes the value, preserving the rest of the
  /// set. Single mode replaces the set and returns true, telling the
  /// widget to close. Disabled options are the caller's gate; this does
  /// not re-check them.
  pub fn toggle(&mut self, value: Value) -> bool {
    if self.multiple {
      if let Some(position) = self.values.iter().position(|v| *v == value) {
        self.values.remove(position);
      } else {
        self.values.push(value);
      }

      false
    } else {
      self.values = vec![value];

      true
    }
  }

  pub fn values(&self) -> &[Value] {
    &self.values
  }
}
