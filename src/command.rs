use super::*;

/// Discrete host events driving the widget. Commands that are invalid
/// for the current configuration are no-ops, never errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
  Close,
  DeselectAll,
  Open,
  OutsideClick,
  Scroll(u32),
  SelectAll,
  SetQuery(String),
  Toggle(Value),
}
