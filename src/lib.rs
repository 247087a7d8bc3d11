/* Exports */

pub mod config;
pub mod errors;
pub mod ontology;
pub mod rdf;
pub mod records;

pub use config::OntologyConfig;
pub use errors::OntologyError;
pub use ontology::collector::{collect, Collection};
pub use ontology::sanitize::sanitize_name;
pub use ontology::synthesizer::{build_ontology, synthesize, Ontology, SynthesisReport};
pub use rdf::sink::{TripleBuffer, TripleSink};
pub use records::{ProcessRecord, SubprocessRecord};

/* Common Definitions */

pub type RdfTriple = [RdfNode; 3];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RdfNode {
  Named{ iri: String },
  RawLit{ val: String },
}
impl RdfNode {
  pub fn named(iri: impl Into<String>) -> Self {
    Self::Named{ iri: iri.into() }
  }
  pub fn literal(val: impl Into<String>) -> Self {
    Self::RawLit{ val: val.into() }
  }
  pub fn iri(&self) -> Option<&str> {
    match self {
      Self::Named{ iri } => Some(iri.as_str()),
      Self::RawLit{ .. } => None,
    }
  }
}

/* Whole run: input file -> ontology -> Turtle file.
  Serialization happens fully in memory before the output
  file is touched, so a failed run never leaves a partial file. */
pub fn run(
  input: &std::path::Path,
  output: &std::path::Path,
  config: &OntologyConfig
) -> errors::Result<SynthesisReport> {
  config.validate()?;
  let records = records::load_records(input)?;
  tracing::info!(records = records.len(), input = %input.display(), "loaded process records");
  let collection = collect(&records);
  tracing::info!(
    business_objects = collection.business_objects.len(),
    business_processes = collection.business_processes.len(),
    "collected entities"
  );
  let ontology = build_ontology(&collection, config);
  let turtle = ontology.to_turtle(config)?;
  rdf::turtle::write_turtle(output, &turtle)?;
  tracing::info!(
    triples = ontology.triples().len(),
    output = %output.display(),
    "OWL ontology written in Turtle format"
  );
  let preview: String = String::from_utf8_lossy(&turtle).chars().take(500).collect();
  tracing::debug!("generated ontology preview:\n{}...", preview);
  Ok(ontology.into_report())
}

#[cfg(test)]
mod interface_tests {
  use super::*;

  fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("process_ontology_{}_{}", std::process::id(), name))
  }

  #[test]
  fn run_writes_turtle_and_overwrites() -> errors::Result<()> {
    let input = scratch_path("run_input.json");
    let output = scratch_path("run_output.ttl");
    std::fs::write(&input, r#"[
      {"name": "Pave Road", "object": "Road Surface",
       "subprocesses": [{"name": "Compact Subgrade", "object": "Subgrade"}]}
    ]"#)?;
    std::fs::write(&output, "stale content that must disappear")?;

    let report = run(&input, &output, &OntologyConfig::default())?;
    assert_eq!(report.containments, 3);

    let written = std::fs::read_to_string(&output)?;
    assert!(!written.contains("stale content"));
    assert!(written.starts_with("@prefix : <http://example.org/standardOntology#> ."));
    let triples = rdf::turtle::parse_turtle_file(&output)?;
    assert!(triples.contains(&[
      RdfNode::named("http://example.org/standardOntology#containsSubgrade"),
      RdfNode::named(rdf::vocab::RDFS_DOMAIN),
      RdfNode::named("http://example.org/standardOntology#PaveRoad"),
    ]));

    std::fs::remove_file(input)?;
    std::fs::remove_file(output)?;
    Ok(())
  }
  #[test]
  fn run_leaves_no_file_on_invalid_standard_name() -> errors::Result<()> {
    let input = scratch_path("bad_std_input.json");
    let output = scratch_path("bad_std_output.ttl");
    std::fs::write(&input, "[]")?;
    let config = OntologyConfig {
      standard_name: "IRC 37".into(),
      ..OntologyConfig::default()
    };
    match run(&input, &output, &config) {
      Err(OntologyError::InvalidIri(iri)) => assert!(iri.ends_with("IRC 37")),
      other => panic!("expected an invalid IRI error, got {:?}", other),
    }
    assert!(!output.exists());
    std::fs::remove_file(input)?;
    Ok(())
  }
  #[test]
  fn run_reports_missing_input() {
    let output = scratch_path("missing_output.ttl");
    let result = run(
      std::path::Path::new("definitely/not/here.json"),
      &output,
      &OntologyConfig::default()
    );
    assert!(matches!(result, Err(OntologyError::Io(_))));
    assert!(!output.exists());
  }
}
