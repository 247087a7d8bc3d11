/*
  Second pass: turn the collected entities into OWL triples.
  Base hierarchy first, then one class per business object and
  per business process, then the containment properties.
*/

use {
  crate::{
    config::OntologyConfig,
    errors::Result,
    ontology::{
      collector::Collection,
      containment::emit_containment,
      entity_set::EntitySet,
      sanitize::sanitize_name,
    },
    rdf::{sink::{TripleBuffer, TripleSink}, turtle, vocab::*},
    records::valid_name,
    RdfTriple,
  },
};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SynthesisReport {
  /// Sanitized business-object identifiers, in declaration order.
  pub objects: Vec<String>,
  /// Sanitized business-process identifiers, in declaration order.
  pub processes: Vec<String>,
  pub containments: usize,
  /// Identifiers declared both as a business object and as a business process.
  pub collisions: Vec<String>,
}

pub fn synthesize<S: TripleSink>(
  collection: &Collection,
  config: &OntologyConfig,
  sink: &mut S
) -> SynthesisReport {
  declare_base_hierarchy(sink, config);

  let objects = declare_entity_classes(sink, config, &collection.business_objects, BUSINESS_OBJECT);
  tracing::debug!(?objects, "declared business object classes");
  let processes = declare_entity_classes(sink, config, &collection.business_processes, BUSINESS_PROCESS);
  tracing::debug!(?processes, "declared business process classes");

  /* Not fixed, only reported: both declarations end up on the same IRI */
  let collisions: Vec<String> = objects
    .iter()
    .filter(|id| processes.contains(id))
    .cloned()
    .collect();
  for id in &collisions {
    tracing::warn!(identifier = %id, "identifier declared as both a business object and a business process");
  }

  let mut containments = 0;
  for (process, entry) in collection.relations.iter() {
    /* A process contains its own object and every object its subprocesses touch */
    let targets = entry.connected_business_object
      .iter()
      .map(String::as_str)
      .chain(entry.subprocesses.iter().filter_map(|sub| valid_name(sub.object.as_deref())));
    for object in targets {
      if emit_containment(sink, config, process, object) {
        containments += 1;
      }
    }
  }

  SynthesisReport {
    objects,
    processes,
    containments,
    collisions,
  }
}

fn declare_base_hierarchy<S: TripleSink>(sink: &mut S, config: &OntologyConfig) {
  let standard = config.iri(&config.standard_name);
  let business_object = config.iri(BUSINESS_OBJECT);
  let business_process = config.iri(BUSINESS_PROCESS);

  sink.add_named(config.ontology_iri(), RDF_TYPE, OWL_ONTOLOGY);
  sink.add_named(&business_object, RDF_TYPE, OWL_CLASS);
  sink.add_named(&business_process, RDF_TYPE, OWL_CLASS);
  sink.add_named(&standard, RDF_TYPE, OWL_CLASS);
  sink.add_named(&business_process, RDFS_SUBCLASS_OF, &standard);
  sink.add_named(&business_object, RDFS_SUBCLASS_OF, &standard);
}

/* Sanitizes and deduplicates names, then declares each survivor
  as a subclass of `parent`, labelled with its identifier. */
fn declare_entity_classes<S: TripleSink>(
  sink: &mut S,
  config: &OntologyConfig,
  names: &EntitySet,
  parent: &str
) -> Vec<String> {
  let parent = config.iri(parent);
  let mut declared = EntitySet::new();
  for name in names.iter() {
    match sanitize_name(name) {
      Some(id) => { declared.insert(&id); },
      None => tracing::debug!(name, "dropping name that sanitizes to nothing"),
    }
  }
  for id in declared.iter() {
    let class = config.iri(id);
    sink.add_named(&class, RDF_TYPE, OWL_CLASS);
    sink.add_named(&class, RDFS_SUBCLASS_OF, &parent);
    sink.add_literal(&class, RDFS_LABEL, id);
  }
  declared.iter().map(str::to_string).collect()
}

/* A synthesized ontology, ready to be serialized */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ontology {
  triples: TripleBuffer,
  report: SynthesisReport,
}

pub fn build_ontology(collection: &Collection, config: &OntologyConfig) -> Ontology {
  let mut triples = TripleBuffer::new();
  let report = synthesize(collection, config, &mut triples);
  if config.dedupe_triples {
    let dropped = triples.dedup();
    tracing::debug!(dropped, "removed repeated triples");
  }
  Ontology { triples, report }
}

impl Ontology {
  pub fn triples(&self) -> &[RdfTriple] {
    self.triples.as_slice()
  }
  pub fn report(&self) -> &SynthesisReport {
    &self.report
  }
  pub fn into_report(self) -> SynthesisReport {
    self.report
  }
  pub fn to_turtle(&self, config: &OntologyConfig) -> Result<Vec<u8>> {
    let mut prefixes: Vec<(&str, &str)> = vec![("", config.namespace.as_str())];
    prefixes.extend(STANDARD_PREFIXES.iter().cloned());
    turtle::to_turtle(self.triples(), &prefixes)
  }
  /// Serializes first, the file is only touched once the whole document exists.
  pub fn write_to(&self, path: &std::path::Path, config: &OntologyConfig) -> Result<()> {
    let document = self.to_turtle(config)?;
    turtle::write_turtle(path, &document)
  }
}
