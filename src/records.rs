/*
  Input side: the business-process records the ontology
  is built from, read once from a JSON file.
*/

use {
  serde::{Deserialize, Deserializer},
  serde_json::Value,
  crate::errors::Result,
};

/* Fields that are missing or not strings deserialize to None,
  they are dropped later on instead of failing the whole run. */
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProcessRecord {
  #[serde(default, deserialize_with = "lenient_string")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub object: Option<String>,
  #[serde(default, deserialize_with = "lenient_subprocesses")]
  pub subprocesses: Vec<SubprocessRecord>,
}
impl ProcessRecord {
  pub fn new(name: &str, object: &str, subprocesses: Vec<SubprocessRecord>) -> Self {
    ProcessRecord {
      name: Some(name.to_string()),
      object: Some(object.to_string()),
      subprocesses,
    }
  }
}

/* Same shape as a process, minus nesting. */
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubprocessRecord {
  #[serde(default, deserialize_with = "lenient_string")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "lenient_string")]
  pub object: Option<String>,
}
impl SubprocessRecord {
  pub fn new(name: &str, object: &str) -> Self {
    SubprocessRecord {
      name: Some(name.to_string()),
      object: Some(object.to_string()),
    }
  }
}

pub fn parse_records(json: &str) -> Result<Vec<ProcessRecord>> {
  Ok(serde_json::from_str(json)?)
}
pub fn load_records(path: &std::path::Path) -> Result<Vec<ProcessRecord>> {
  let json = std::fs::read_to_string(path)?;
  parse_records(&json)
}

/// Placeholder strings left behind by upstream exporters, treated as absent.
const PLACEHOLDERS: [&str; 2] = ["undefined", "null"];

/// Accepts a name only if it is present, not blank and not a placeholder.
pub fn valid_name(name: Option<&str>) -> Option<&str> {
  let name = name?;
  let trimmed = name.trim();
  if trimmed.is_empty() || PLACEHOLDERS.contains(&trimmed) {
    return None
  }
  Some(name)
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(Some(s)),
    _ => Ok(None),
  }
}
fn lenient_subprocesses<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<SubprocessRecord>, D::Error> {
  match Value::deserialize(deserializer)? {
    Value::Array(items) => Ok(
      items.into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
    ),
    _ => Ok(Vec::new()),
  }
}
