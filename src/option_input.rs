use super::*;

/// Host-declared option shape. A tagged variant instead of runtime
/// shape-sniffing, so mixed or empty input is never ambiguous.
#[derive(Clone, Debug)]
pub enum OptionInput {
  Flat(Vec<SelectOption>),
  Grouped(Vec<OptionGroup>),
}

impl OptionInput {
  /// The canonical flat sequence: group order, then intra-group order,
  /// with each option stamped with its group label so later stages only
  /// ever see the flat form. Flat input passes through unchanged.
  pub fn normalize(self) -> Vec<SelectOption> {
    match self {
      OptionInput::Flat(options) => options,
      OptionInput::Grouped(groups) => groups
        .into_iter()
        .flat_map(|group| {
          let OptionGroup { label, options } = group;

          options.into_iter().map(move |mut option| {
            option.group = Some(label.clone());
            option
          })
        })
        .collect(),
    }
  }
}
