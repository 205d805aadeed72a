use super::*;

/// Case-insensitive substring match on labels only. An empty or
/// whitespace-only query returns every option in order; otherwise a
/// single stable linear scan, no index.
pub fn filter<'a>(
  options: &'a [SelectOption],
  query: &str,
) -> Vec<&'a SelectOption> {
  if query.trim().is_empty() {
    return options.iter().collect();
  }

  let needle = query.to_lowercase();

  options
    .iter()
    .filter(|option| option.label.to_lowercase().contains(&needle))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fruit_options() -> Vec<SelectOption> {
    vec![
      SelectOption::new(1, "Apple", "apple"),
      SelectOption::new(2, "Banana", "banana"),
      SelectOption::new(3, "Grape", "grape"),
    ]
  }

  #[test]
  fn empty_query_returns_every_option_in_order() {
    let options = fruit_options();

    let labels: Vec<&str> = filter(&options, "")
      .iter()
      .map(|option| option.label.as_str())
      .collect();

    assert_eq!(labels, ["Apple", "Banana", "Grape"]);
  }

  #[test]
  fn whitespace_only_query_is_treated_as_empty() {
    let options = fruit_options();

    assert_eq!(filter(&options, "   ").len(), 3);
  }

  #[test]
  fn matching_is_case_insensitive() {
    let options = fruit_options();

    let labels: Vec<&str> = filter(&options, "APPLE")
      .iter()
      .map(|option| option.label.as_str())
      .collect();

    assert_eq!(labels, ["Apple"]);
  }

  #[test]
  fn substring_matches_narrow_as_the_query_grows() {
    let options = fruit_options();

    assert_eq!(filter(&options, "a").len(), 3);

    let labels: Vec<&str> = filter(&options, "an")
      .iter()
      .map(|option| option.label.as_str())
      .collect();

    assert_eq!(labels, ["Banana"]);
  }

  #[test]
  fn value_and_group_are_not_matched() {
    let mut option = SelectOption::new(1, "First", "apple");
    option.group = Some("apple".to_string());

    let options = vec![option];

    assert!(filter(&options, "apple").is_empty());
  }
}
