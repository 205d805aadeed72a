use super::*;

/// Mutations reported upward to the host; the only outputs the engine
/// produces. The selection snapshot is an owned copy, never a live
/// reference into the engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Effect {
  Closed,
  SelectionChanged(Vec<Value>),
}
