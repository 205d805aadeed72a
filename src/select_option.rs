use super::*;

/// One selectable entry. `value` is what enters the selection set; `id`
/// only identifies the option within a widget instance. Malformed
/// options are not validated anywhere, they just render an empty label
/// or carry an unmatchable value.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectOption {
  #[serde(default)]
  pub disabled: bool,
  #[serde(default)]
  pub group: Option<String>,
  pub id: Value,
  pub label: String,
  pub value: Value,
}

impl SelectOption {
  pub fn new(
    id: impl Into<Value>,
    label: impl Into<String>,
    value: impl Into<Value>,
  ) -> Self {
    Self {
      disabled: false,
      group: None,
      id: id.into(),
      label: label.into(),
      value: value.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_with_optional_fields_defaulted() {
    let option = serde_json::from_str::<SelectOption>(
      r#"{"id": 1, "label": "Apple", "value": "apple"}"#,
    )
    .unwrap();

    assert_eq!(option.id, Value::from(1));
    assert_eq!(option.label, "Apple");
    assert_eq!(option.value, Value::from("apple"));
    assert_eq!(option.group, None);
    assert!(!option.disabled);
  }

  #[test]
  fn deserializes_group_and_disabled() {
    let option = serde_json::from_str::<SelectOption>(
      r#"{"id": "a", "label": "Apple", "value": 3, "group": "Fruits", "disabled": true}"#,
    )
    .unwrap();

    assert_eq!(option.group.as_deref(), Some("Fruits"));
    assert!(option.disabled);
  }
}
