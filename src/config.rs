use crate::errors::{OntologyError, Result};

pub const DEFAULT_NAMESPACE: &str = "http://example.org/standardOntology#";
pub const DEFAULT_STANDARD_NAME: &str = "IRC37";

/* Everything a run needs besides the records themselves. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyConfig {
  /// Namespace every generated class and property lives in. Ends in `#` or `/`.
  pub namespace: String,
  /// Short code of the standard, used as the root class of the hierarchy.
  pub standard_name: String,
  /// Collapse structurally identical triples before serialization.
  pub dedupe_triples: bool,
}
impl Default for OntologyConfig {
  fn default() -> Self {
    OntologyConfig {
      namespace: DEFAULT_NAMESPACE.to_string(),
      standard_name: DEFAULT_STANDARD_NAME.to_string(),
      dedupe_triples: false,
    }
  }
}
impl OntologyConfig {
  pub fn new(standard_name: impl Into<String>) -> Self {
    OntologyConfig {
      standard_name: standard_name.into(),
      ..Self::default()
    }
  }
  pub fn validate(&self) -> Result<()> {
    if !(self.namespace.ends_with('#') || self.namespace.ends_with('/')) {
      return Err(OntologyError::InvalidConfig(
        format!("namespace {} must end in '#' or '/'", self.namespace)
      ))
    }
    if self.standard_name.trim().is_empty() {
      return Err(OntologyError::InvalidConfig("standard name is empty".into()))
    }
    Ok(())
  }
  /// The namespace without its trailing `#`.
  pub fn ontology_iri(&self) -> &str {
    self.namespace.strip_suffix('#').unwrap_or(&self.namespace)
  }
  pub fn iri(&self, local_name: &str) -> String {
    format!("{}{}", self.namespace, local_name)
  }
}
