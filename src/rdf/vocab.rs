/* Namespaces */

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Prefixes declared at the top of every document, after the ontology's own.
pub const STANDARD_PREFIXES: [(&str, &str); 4] = [
  ("rdf", RDF),
  ("rdfs", RDFS),
  ("owl", OWL),
  ("xsd", XSD),
];

/* Terms */

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

/* Local names of the fixed part of the class hierarchy */

pub const BUSINESS_OBJECT: &str = "BusinessObject";
pub const BUSINESS_PROCESS: &str = "BusinessProcess";
pub const CONTAINS: &str = "contains";
