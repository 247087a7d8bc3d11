use crate::{
  config::OntologyConfig,
  ontology::sanitize::sanitize_name,
  rdf::{sink::TripleSink, vocab::*},
};

/* One object property per connected object, shared by every
  process that contains it. Repeated emissions add another
  domain for the same property.

  Emits nothing and returns false if either name sanitizes
  to nothing. */
pub fn emit_containment<S: TripleSink>(
  sink: &mut S,
  config: &OntologyConfig,
  subject: &str,
  object: &str
) -> bool {
  let (subject_id, object_id) = match (sanitize_name(subject), sanitize_name(object)) {
    (Some(s), Some(o)) => (s, o),
    _ => {
      tracing::debug!(subject, object, "skipping containment without a usable identifier");
      return false
    },
  };
  let property = config.iri(&format!("{}{}", CONTAINS, object_id));
  let subject_iri = config.iri(&subject_id);
  let object_iri = config.iri(&object_id);

  sink.add_named(&property, RDF_TYPE, OWL_OBJECT_PROPERTY);
  sink.add_named(&property, RDFS_DOMAIN, &subject_iri);
  sink.add_named(&property, RDFS_RANGE, &object_iri);
  sink.add_literal(&property, RDFS_LABEL, &format!("{} {}", CONTAINS, object));

  sink.add_literal(&subject_iri, RDFS_LABEL, subject);
  sink.add_literal(&object_iri, RDFS_LABEL, object);
  true
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use crate::{RdfNode, RdfTriple};

  fn ns(local: &str) -> RdfNode {
    RdfNode::named(format!("http://example.org/standardOntology#{}", local))
  }

  #[test]
  fn emits_property_with_domain_range_and_labels() {
    let mut triples: Vec<RdfTriple> = Vec::new();
    assert!(emit_containment(&mut triples, &OntologyConfig::default(), "Pave Road", "Road Surface"));
    assert_eq!(triples, vec![
      [ns("containsRoadSurface"), RdfNode::named(RDF_TYPE), RdfNode::named(OWL_OBJECT_PROPERTY)],
      [ns("containsRoadSurface"), RdfNode::named(RDFS_DOMAIN), ns("PaveRoad")],
      [ns("containsRoadSurface"), RdfNode::named(RDFS_RANGE), ns("RoadSurface")],
      [ns("containsRoadSurface"), RdfNode::named(RDFS_LABEL), RdfNode::literal("contains Road Surface")],
      [ns("PaveRoad"), RdfNode::named(RDFS_LABEL), RdfNode::literal("Pave Road")],
      [ns("RoadSurface"), RdfNode::named(RDFS_LABEL), RdfNode::literal("Road Surface")],
    ]);
  }
  #[test]
  fn property_is_named_after_the_object_only() {
    let config = OntologyConfig::default();
    let mut triples: Vec<RdfTriple> = Vec::new();
    emit_containment(&mut triples, &config, "Pave Road", "Bitumen");
    emit_containment(&mut triples, &config, "Seal Cracks", "Bitumen");
    let domains: Vec<&RdfNode> = triples.iter()
      .filter(|[s, p, _]| *s == ns("containsBitumen") && *p == RdfNode::named(RDFS_DOMAIN))
      .map(|[_, _, o]| o)
      .collect();
    assert_eq!(domains, vec![&ns("PaveRoad"), &ns("SealCracks")]);
  }
  #[test]
  fn unusable_names_emit_nothing() {
    let mut triples: Vec<RdfTriple> = Vec::new();
    assert!(!emit_containment(&mut triples, &OntologyConfig::default(), "Pave Road", "%%%"));
    assert!(!emit_containment(&mut triples, &OntologyConfig::default(), "???", "Subgrade"));
    assert!(triples.is_empty());
  }
}
