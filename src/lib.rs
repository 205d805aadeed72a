//! Selection-state and list-rendering engine for a multi-capability
//! select widget: heterogeneous option input is normalized into a
//! canonical flat sequence, filtered by a search query, optionally
//! re-partitioned into display groups, and windowed for virtualized
//! rendering, while a selection state machine owns the set of chosen
//! values. The host feeds discrete [`Command`]s and consumes
//! [`Effect`]s; nothing here performs I/O.

use {
  serde::{Deserialize, Serialize},
  std::fmt,
};

pub use {
  command::Command,
  config::Config,
  dropdown::Dropdown,
  effect::Effect,
  filter::filter,
  option_group::OptionGroup,
  option_input::OptionInput,
  projection::project,
  row::Row,
  select_option::SelectOption,
  selection::Selection,
  value::Value,
  window::{Window, WindowItem},
};

mod command;
mod config;
mod dropdown;
mod effect;
mod filter;
mod option_group;
mod option_input;
mod projection;
mod row;
mod select_option;
mod selection;
mod value;
mod window;

pub const OPTION_ROW_HEIGHT: u32 = 40;
pub const HEADER_ROW_HEIGHT: u32 = 35;

pub const OVERSCAN: usize = 5;

pub const UNGROUPED_LABEL: &str = "Ungrouped";

const DEFAULT_MAX_VISIBLE_HEIGHT: u32 = 200;
const DEFAULT_PLACEHOLDER: &str = "Select...";
