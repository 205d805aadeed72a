use super::*;

/// Re-partitions an already-filtered sequence into display groups.
/// Bucket order is the first-seen order of group labels, not
/// alphabetical; options without a group land in an [`UNGROUPED_LABEL`]
/// bucket. A group emptied by the current search never appears, since a
/// bucket only exists once a surviving option lands in it. Returns
/// `None` when grouping is disabled.
pub fn project(
  options: &[&SelectOption],
  grouping: bool,
) -> Option<Vec<OptionGroup>> {
  if !grouping {
    return None;
  }

  let mut groups: Vec<OptionGroup> = Vec::new();

  for option in options {
    let label = option.group.as_deref().unwrap_or(UNGROUPED_LABEL);

    match groups.iter_mut().find(|group| group.label == label) {
      Some(group) => group.options.push((*option).clone()),
      None => groups.push(OptionGroup {
        label: label.to_string(),
        options: vec![(*option).clone()],
      }),
    }
  }

  Some(groups)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn grouped(id: i64, label: &str, group: &str) -> SelectOption {
    let mut option = SelectOption::new(id, label, id);
    option.group = Some(group.to_string());
    option
  }

  #[test]
  fn returns_none_when_grouping_is_disabled() {
    let option = SelectOption::new(1, "Apple", "apple");

    assert_eq!(project(&[&option], false), None);
  }

  #[test]
  fn buckets_keep_first_seen_order_not_alphabetical() {
    let options = [
      grouped(1, "Tomato", "Vegetables"),
      grouped(2, "Apple", "Fruits"),
      grouped(3, "Carrot", "Vegetables"),
    ];

    let refs: Vec<&SelectOption> = options.iter().collect();

    let groups = project(&refs, true).unwrap();

    let labels: Vec<&str> =
      groups.iter().map(|group| group.label.as_str()).collect();

    assert_eq!(labels, ["Vegetables", "Fruits"]);
    assert_eq!(groups[0].options.len(), 2);
  }

  #[test]
  fn options_without_a_group_land_in_the_ungrouped_bucket() {
    let options = [
      grouped(1, "Apple", "Fruits"),
      SelectOption::new(2, "Stray", "stray"),
    ];

    let refs: Vec<&SelectOption> = options.iter().collect();

    let groups = project(&refs, true).unwrap();

    assert_eq!(groups[1].label, UNGROUPED_LABEL);
    assert_eq!(groups[1].options[0].label, "Stray");
  }

  #[test]
  fn groups_emptied_by_the_filter_are_dropped_entirely() {
    let options = [
      grouped(1, "Apple", "A"),
      grouped(2, "Banana", "B"),
    ];

    let canonical: Vec<SelectOption> = options.to_vec();
    let visible = filter(&canonical, "ban");

    let groups = project(&visible, true).unwrap();

    let labels: Vec<&str> =
      groups.iter().map(|group| group.label.as_str()).collect();

    assert_eq!(labels, ["B"]);
    assert!(groups.iter().all(|group| !group.options.is_empty()));
  }
}
