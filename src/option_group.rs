use super::*;

/// A named bucket of options, used both as grouped input and as the
/// projector's output.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OptionGroup {
  pub label: String,
  pub options: Vec<SelectOption>,
}
