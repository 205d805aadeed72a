use super::*;

/// One element of the canonical render sequence handed to the host:
/// either a group header or a selectable option. Virtualization indexes
/// this sequence, not the option list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Row {
  Header { label: String },
  Option { option: SelectOption },
}

impl Row {
  pub fn height(&self) -> u32 {
    match self {
      Row::Header { .. } => HEADER_ROW_HEIGHT,
      Row::Option { .. } => OPTION_ROW_HEIGHT,
    }
  }

  pub fn option(&self) -> Option<&SelectOption> {
    match self {
      Row::Header { .. } => None,
      Row::Option { option } => Some(option),
    }
  }
}
