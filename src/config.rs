use super::*;

/// Widget configuration, fixed for the lifetime of a [`Dropdown`].
/// Every flag is independently togglable; no combination is rejected.
/// `select_all` simply has no effect when `multiple` is off, and
/// `groupable` has no effect on options that carry no group.
#[derive(Clone, Debug)]
pub struct Config {
  pub disabled: bool,
  pub groupable: bool,
  pub max_visible_height: u32,
  pub multiple: bool,
  pub placeholder: String,
  pub searchable: bool,
  pub select_all: bool,
  pub virtualized: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      disabled: false,
      groupable: false,
      max_visible_height: DEFAULT_MAX_VISIBLE_HEIGHT,
      multiple: true,
      placeholder: DEFAULT_PLACEHOLDER.to_string(),
      searchable: true,
      select_all: true,
      virtualized: true,
    }
  }
}
