use super::*;

pub(crate) struct App {
  active: usize,
  demos: Vec<Demo>,
}

impl App {
  fn dispatch(&mut self, command: Command) {
    let effects = self.demos[self.active].dropdown.dispatch(command);

    for effect in effects {
      match effect {
        Effect::Closed => {}
        Effect::SelectionChanged(values) => {
          self.demos[self.active].reported = values;
        }
      }
    }
  }

  fn draw(&self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let titles: Vec<Line> = self
      .demos
      .iter()
      .map(|demo| Line::from(demo.title.to_uppercase()))
      .collect();

    let tabs = Tabs::new(titles)
      .select(self.active)
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs, layout[0]);

    let demo = &self.demos[self.active];
    let dropdown = &demo.dropdown;

    let trigger = Paragraph::new(dropdown.display_text())
      .style(if dropdown.is_open() {
        Style::default().fg(Color::Cyan)
      } else {
        Style::default().fg(Color::White)
      })
      .block(Block::default().title(demo.title).borders(Borders::ALL));

    frame.render_widget(trigger, layout[1]);

    if dropdown.is_open() {
      let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Min(0),
        ])
        .split(layout[2]);

      if dropdown.config().searchable {
        let search = Paragraph::new(format!("Search: {}", dropdown.query()))
          .style(Style::default().fg(Color::White));

        frame.render_widget(search, panel[0]);
      }

      if dropdown.config().multiple && dropdown.config().select_all {
        let marker = if dropdown.is_all_selected() {
          "[x]"
        } else {
          "[ ]"
        };

        let summary = Paragraph::new(format!(
          "{marker} select all • {} selected",
          dropdown.selected_count()
        ))
        .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(summary, panel[1]);
      }

      let list = List::new(demo.list_items());

      frame.render_widget(list, panel[2]);
    } else {
      let selected = demo
        .reported
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

      let summary = Paragraph::new(format!("selected: {selected}"))
        .style(Style::default().fg(Color::DarkGray));

      frame.render_widget(summary, layout[2]);
    }

    let status = if dropdown.is_open() {
      OPEN_STATUS
    } else {
      CLOSED_STATUS
    };

    let status = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[3]);
  }

  fn handle_closed_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => return true,
      KeyCode::Enter | KeyCode::Down | KeyCode::Char(' ') => {
        self.dispatch(Command::Open);
        self.demos[self.active].clamp_cursor();
      }
      KeyCode::Left | KeyCode::Char('h') => {
        let count = self.demos.len();
        self.active = (self.active + count - 1) % count;
      }
      KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
        self.active = (self.active + 1) % self.demos.len();
      }
      KeyCode::Char('c') => self.dispatch(Command::DeselectAll),
      _ => {}
    }

    false
  }

  fn handle_open_key(&mut self, key: KeyEvent) {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Esc => self.dispatch(Command::Close),
      KeyCode::Up => self.demos[self.active].cursor_up(),
      KeyCode::Down => self.demos[self.active].cursor_down(),
      KeyCode::Enter => {
        // disabled options never reach Toggle; the gate lives here,
        // not in the engine
        let value = {
          let demo = &self.demos[self.active];

          demo
            .dropdown
            .rows()
            .get(demo.cursor)
            .and_then(Row::option)
            .filter(|option| !option.disabled)
            .map(|option| option.value.clone())
        };

        if let Some(value) = value {
          self.dispatch(Command::Toggle(value));
        }
      }
      KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => {
        let command = if self.demos[self.active].dropdown.is_all_selected() {
          Command::DeselectAll
        } else {
          Command::SelectAll
        };

        self.dispatch(command);
      }
      KeyCode::Char('x') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.dispatch(Command::DeselectAll);
      }
      KeyCode::Backspace => {
        let mut query =
          self.demos[self.active].dropdown.query().to_string();

        query.pop();

        self.dispatch(Command::SetQuery(query));
        self.demos[self.active].clamp_cursor();
      }
      KeyCode::Char(ch) => {
        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return;
        }

        let mut query =
          self.demos[self.active].dropdown.query().to_string();

        query.push(ch);

        self.dispatch(Command::SetQuery(query));
        self.demos[self.active].clamp_cursor();
      }
      _ => {}
    }
  }

  pub(crate) fn new() -> Self {
    Self {
      active: 0,
      demos: vec![
        Demo::simple(),
        Demo::grouped(),
        Demo::many(),
        Demo::single(),
      ],
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      terminal.draw(|frame| self.draw(frame))?;

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      if self.demos[self.active].dropdown.is_open() {
        self.handle_open_key(key);
      } else if self.handle_closed_key(key) {
        break;
      }
    }

    Ok(())
  }
}

struct Demo {
  cursor: usize,
  dropdown: Dropdown,
  reported: Vec<Value>,
  title: &'static str,
}

impl Demo {
  fn clamp_cursor(&mut self) {
    let rows = self.dropdown.rows();

    let target = if rows
      .get(self.cursor)
      .is_some_and(|row| row.option().is_some())
    {
      Some(self.cursor)
    } else {
      (0..rows.len()).find(|&index| rows[index].option().is_some())
    };

    if let Some(index) = target {
      self.cursor = index;
      self.dropdown.scroll_to(index);
    } else {
      self.cursor = 0;
    }
  }

  fn cursor_down(&mut self) {
    let rows = self.dropdown.rows();

    let next = (self.cursor + 1..rows.len())
      .find(|&index| rows[index].option().is_some());

    if let Some(index) = next {
      self.cursor = index;
      self.dropdown.scroll_to(index);
    }
  }

  fn cursor_up(&mut self) {
    let rows = self.dropdown.rows();

    let previous = (0..self.cursor)
      .rev()
      .find(|&index| rows[index].option().is_some());

    if let Some(index) = previous {
      self.cursor = index;
      self.dropdown.scroll_to(index);
    }
  }

  fn grouped() -> Self {
    let input = OptionInput::Grouped(vec![
      OptionGroup {
        label: "Fruits".to_string(),
        options: vec![
          SelectOption::new(1, "Apple", "apple"),
          SelectOption::new(2, "Banana", "banana"),
          SelectOption::new(3, "Orange", "orange"),
        ],
      },
      OptionGroup {
        label: "Vegetables".to_string(),
        options: vec![
          SelectOption::new(4, "Carrot", "carrot"),
          SelectOption::new(5, "Lettuce", "lettuce"),
          SelectOption::new(6, "Tomato", "tomato"),
        ],
      },
    ]);

    let config = Config {
      groupable: true,
      ..Config::default()
    };

    Self::new("grouped", config, input)
  }

  fn list_items(&self) -> Vec<ListItem> {
    let rows = self.dropdown.rows();

    if rows.is_empty() {
      return vec![ListItem::new(Line::from(Span::styled(
        "No options found.",
        Style::default().fg(Color::DarkGray),
      )))];
    }

    match self.dropdown.window_items() {
      Some(items) => {
        let scroll = self.dropdown.scroll_offset();

        let bottom =
          scroll.saturating_add(self.dropdown.config().max_visible_height);

        // a terminal cannot paint partial rows, so overscan rows
        // outside the viewport are skipped rather than clipped
        items
          .iter()
          .filter(|item| {
            item.offset + item.size > scroll && item.offset < bottom
          })
          .map(|item| self.row_item(item.index, &rows[item.index]))
          .collect()
      }
      None => rows
        .iter()
        .enumerate()
        .map(|(index, row)| self.row_item(index, row))
        .collect(),
    }
  }

  fn many() -> Self {
    let options = (1..=1000)
      .map(|index| {
        SelectOption::new(index, format!("Option {index}"), index)
      })
      .collect();

    let config = Config {
      max_visible_height: 400,
      ..Config::default()
    };

    Self::new("1000 options", config, OptionInput::Flat(options))
  }

  fn new(title: &'static str, config: Config, input: OptionInput) -> Self {
    Self {
      cursor: 0,
      dropdown: Dropdown::new(config, input, Vec::new()),
      reported: Vec::new(),
      title,
    }
  }

  fn row_item(&self, index: usize, row: &Row) -> ListItem {
    match row {
      Row::Header { label } => ListItem::new(Line::from(Span::styled(
        label.clone(),
        Style::default()
          .fg(Color::DarkGray)
          .add_modifier(Modifier::BOLD),
      ))),
      Row::Option { option } => {
        let selected = self.dropdown.is_selected(&option.value);

        let marker = if self.dropdown.config().multiple {
          if selected { "[x]" } else { "[ ]" }
        } else if selected {
          "(•)"
        } else {
          "( )"
        };

        let style = if option.disabled {
          Style::default().fg(Color::DarkGray)
        } else if index == self.cursor {
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
        } else {
          Style::default().fg(Color::White)
        };

        ListItem::new(Line::from(Span::styled(
          format!("  {marker} {}", option.label),
          style,
        )))
      }
    }
  }

  fn simple() -> Self {
    let mut options: Vec<SelectOption> = (1..=5)
      .map(|index| {
        SelectOption::new(index, format!("Option {index}"), index)
      })
      .collect();

    options[3].disabled = true;

    let config = Config {
      virtualized: false,
      ..Config::default()
    };

    Self::new("multi + search", config, OptionInput::Flat(options))
  }

  fn single() -> Self {
    let options = (1..=5)
      .map(|index| {
        SelectOption::new(index, format!("Option {index}"), index)
      })
      .collect();

    let config = Config {
      multiple: false,
      placeholder: "Pick one...".to_string(),
      select_all: false,
      ..Config::default()
    };

    Self::new("single", config, OptionInput::Flat(options))
  }
}
