use super::*;

/// The widget engine. Composes normalization, filtering, grouping,
/// selection and the virtualization window behind a command interface:
/// raw options flow into a canonical sequence, the search query narrows
/// it, the projector interleaves group headers, the window picks the
/// materialized slice, and the selection answers membership for every
/// rendered option.
///
/// Everything runs synchronously on the caller's thread; each command
/// returns its effects before the next one is processed.
pub struct Dropdown {
  config: Config,
  open: bool,
  options: Vec<SelectOption>,
  query: String,
  rows: Vec<Row>,
  scroll_offset: u32,
  selection: Selection,
  window: Option<Window>,
}

impl Dropdown {
  fn close(&mut self, effects: &mut Vec<Effect>) {
    if !self.open {
      return;
    }

    self.open = false;
    self.scroll_offset = 0;

    // closing forgets the search, not the selection
    if !self.query.is_empty() {
      self.query.clear();
      self.refresh();
    }

    effects.push(Effect::Closed);
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn dispatch(&mut self, command: Command) -> Vec<Effect> {
    let mut effects = Vec::new();

    match command {
      Command::Close | Command::OutsideClick => self.close(&mut effects),
      Command::DeselectAll => {
        if !self.config.disabled {
          self.selection.deselect_all();
          effects.push(Effect::SelectionChanged(self.selection.snapshot()));
        }
      }
      Command::Open => {
        if !self.config.disabled && !self.open {
          self.open = true;
        }
      }
      Command::Scroll(offset) => {
        self.scroll_offset = match &self.window {
          Some(window) => offset.min(
            window
              .total_size()
              .saturating_sub(self.config.max_visible_height),
          ),
          None => 0,
        };
      }
      Command::SelectAll => {
        if !self.config.disabled
          && self.config.multiple
          && self.config.select_all
        {
          let visible: Vec<&SelectOption> =
            self.rows.iter().filter_map(Row::option).collect();

          self.selection.select_all(&visible);

          effects.push(Effect::SelectionChanged(self.selection.snapshot()));
        }
      }
      Command::SetQuery(query) => {
        if self.config.searchable && self.open && query != self.query {
          self.query = query;
          self.refresh();
        }
      }
      Command::Toggle(value) => {
        if !self.config.disabled {
          let close = self.selection.toggle(value);

          effects.push(Effect::SelectionChanged(self.selection.snapshot()));

          if close {
            self.close(&mut effects);
          }
        }
      }
    }

    effects
  }

  /// The trigger caption: placeholder when nothing is selected, the
  /// picked option's label in single mode, a count otherwise.
  pub fn display_text(&self) -> String {
    if self.selection.is_empty() {
      return self.config.placeholder.clone();
    }

    if !self.config.multiple {
      if let Some(option) = self
        .options
        .iter()
        .find(|option| Some(&option.value) == self.selection.values().first())
      {
        return option.label.clone();
      }

      return self.config.placeholder.clone();
    }

    format!("{} selected", self.selection.len())
  }

  pub fn is_all_selected(&self) -> bool {
    let visible: Vec<&SelectOption> =
      self.rows.iter().filter_map(Row::option).collect();

    self.selection.is_all_selected(&visible)
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn is_selected(&self, value: &Value) -> bool {
    self.selection.is_selected(value)
  }

  pub fn new(config: Config, input: OptionInput, initial: Vec<Value>) -> Self {
    let selection = Selection::new(config.multiple, initial);

    let mut dropdown = Self {
      config,
      open: false,
      options: input.normalize(),
      query: String::new(),
      rows: Vec::new(),
      scroll_offset: 0,
      selection,
      window: None,
    };

    dropdown.refresh();

    dropdown
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  fn refresh(&mut self) {
    let visible = filter(&self.options, &self.query);

    self.rows = match project(&visible, self.config.groupable) {
      Some(groups) => {
        let mut rows = Vec::new();

        for group in groups {
          rows.push(Row::Header { label: group.label });

          for option in group.options {
            rows.push(Row::Option { option });
          }
        }

        rows
      }
      None => visible
        .into_iter()
        .cloned()
        .map(|option| Row::Option { option })
        .collect(),
    };

    self.window = if self.config.virtualized {
      let rows = &self.rows;

      Some(Window::new(rows.len(), |index| rows[index].height()))
    } else {
      None
    };
  }

  /// The current render sequence, flat or grouped-interleaved.
  pub fn rows(&self) -> &[Row] {
    &self.rows
  }

  pub fn scroll_offset(&self) -> u32 {
    self.scroll_offset
  }

  /// Minimal scroll adjustment that brings row `index` fully into the
  /// viewport. No-op when virtualization is off.
  pub fn scroll_to(&mut self, index: usize) {
    let Some(window) = &self.window else {
      return;
    };

    if index >= self.rows.len() {
      return;
    }

    let top = window.offset_of(index);
    let bottom = top + window.size_of(index);
    let viewport = self.config.max_visible_height;

    if top < self.scroll_offset {
      self.scroll_offset = top;
    } else if bottom > self.scroll_offset.saturating_add(viewport) {
      self.scroll_offset = bottom.saturating_sub(viewport);
    }
  }

  pub fn selected_count(&self) -> usize {
    self.selection.len()
  }

  /// Swaps the option universe. Selection is kept as-is; the render
  /// sequence and the window's prefix sums rebuild.
  pub fn set_options(&mut self, input: OptionInput) {
    self.options = input.normalize();
    self.refresh();
  }

  pub fn total_size(&self) -> u32 {
    match &self.window {
      Some(window) => window.total_size(),
      None => self.rows.iter().map(Row::height).sum(),
    }
  }

  pub fn values(&self) -> &[Value] {
    self.selection.values()
  }

  /// The materialized slice for the current scroll position, or `None`
  /// when virtualization is off and the host should render every row.
  pub fn window_items(&self) -> Option<Vec<WindowItem>> {
    self.window.as_ref().map(|window| {
      window.range(self.scroll_offset, self.config.max_visible_height, OVERSCAN)
    })
  }
}
