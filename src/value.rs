use super::*;

/// A selectable payload. The host may use strings or integers, so values
/// deserialize untagged from either.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
  Int(i64),
  Text(String),
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Int(value) => write!(f, "{value}"),
      Value::Text(value) => f.write_str(value),
    }
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::Text(value.to_string())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::Text(value)
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Self {
    Value::Int(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_untagged_from_string_or_integer() {
    let text = serde_json::from_str::<Value>(r#""apple""#).unwrap();
    assert_eq!(text, Value::from("apple"));

    let int = serde_json::from_str::<Value>("42").unwrap();
    assert_eq!(int, Value::from(42));
  }

  #[test]
  fn display_matches_payload() {
    assert_eq!(Value::from("apple").to_string(), "apple");
    assert_eq!(Value::from(7).to_string(), "7");
  }

  #[test]
  fn integer_and_text_values_are_distinct() {
    assert_ne!(Value::from(1), Value::from("1"));
  }
}
