/*
  Turtle in and out. Writing goes through rio's TurtleFormatter
  into memory first, reading goes through rio's TurtleParser.
*/

use {
  std::io::Write,
  rio_api::{
    formatter::TriplesFormatter,
    model::{Literal, NamedNode, Subject, Term, Triple as RioTriple},
  },
  rio_turtle::TurtleFormatter,
  crate::{
    errors::{OntologyError as Error, Result},
    RdfNode, RdfTriple,
  },
};

/// Serializes `triples` into a complete Turtle document, prefix lines first.
///
/// Every IRI is checked before anything is formatted, a single bad one fails
/// the whole document.
pub fn to_turtle(triples: &[RdfTriple], prefixes: &[(&str, &str)]) -> Result<Vec<u8>> {
  for triple in triples {
    for iri in triple.iter().filter_map(RdfNode::iri) {
      check_iri(iri)?;
    }
  }
  let mut header: Vec<u8> = Vec::new();
  for (prefix, namespace) in prefixes {
    check_iri(namespace)?;
    writeln!(header, "@prefix {}: <{}> .", prefix, namespace).map_err(|e| Error::Serialize(Box::new(e)))?;
  }
  writeln!(header).map_err(|e| Error::Serialize(Box::new(e)))?;

  let mut formatter = TurtleFormatter::new(header);
  for [subject, predicate, object] in triples {
    let subject = match subject {
      RdfNode::Named{ iri } => Subject::NamedNode(NamedNode{ iri }),
      RdfNode::RawLit{ val } => return Err(Error::InvalidIri(format!("\"{}\" (literal in subject position)", val))),
    };
    let predicate = match predicate {
      RdfNode::Named{ iri } => NamedNode{ iri },
      RdfNode::RawLit{ val } => return Err(Error::InvalidIri(format!("\"{}\" (literal in predicate position)", val))),
    };
    let object = match object {
      RdfNode::Named{ iri } => Term::NamedNode(NamedNode{ iri }),
      RdfNode::RawLit{ val } => Term::Literal(Literal::Simple{ value: val }),
    };
    formatter
      .format(&RioTriple{ subject, predicate, object })
      .map_err(|e| Error::Serialize(Box::new(e)))?;
  }
  formatter.finish().map_err(|e| Error::Serialize(Box::new(e)))
}

/// Replaces whatever is at `path` with `turtle`.
pub fn write_turtle(path: &std::path::Path, turtle: &[u8]) -> Result<()> {
  std::fs::write(path, turtle)?;
  Ok(())
}

pub fn parse_turtle<R: std::io::BufRead>(reader: R) -> Result<Vec<RdfTriple>> {
  use rio_api::parser::TriplesParser;
  use rio_turtle::{TurtleError, TurtleParser};

  let mut triples: Vec<RdfTriple> = Vec::new();

  TurtleParser::new(reader, None)
    .parse_all(&mut |t| {
      if let RioTriple {
        subject: Subject::NamedNode(NamedNode{ iri: s }),
        predicate: NamedNode{ iri: p },
        object: o,
      } = t {
        let o = match o {
          Term::Literal(Literal::Simple{ value }) |
          Term::Literal(Literal::LanguageTaggedString{ value, .. }) |
          Term::Literal(Literal::Typed{ value, .. }) => Some(RdfNode::literal(value)),
          Term::NamedNode(NamedNode{ iri }) => Some(RdfNode::named(iri)),
          _ => None,
        };
        if let Some(o) = o {
          triples.push([RdfNode::named(s), RdfNode::named(p), o]);
        }
      }
      Ok(()) as std::result::Result<(), TurtleError>
    })?;

  Ok(triples)
}
pub fn parse_turtle_file(path: &std::path::Path) -> Result<Vec<RdfTriple>> {
  use std::io::BufReader;
  use std::fs::File;
  parse_turtle(BufReader::new(File::open(path)?))
}

/* An absolute IRI with nothing in it that an IRIREF forbids */
fn check_iri(iri: &str) -> Result<()> {
  let has_scheme = match iri.find(':') {
    Some(pos) if pos > 0 => {
      let scheme = &iri[..pos];
      scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
    },
    _ => false,
  };
  let forbidden = iri.chars().any(|c| c <= ' ' || "<>\"{}|^`\\".contains(c));
  if !has_scheme || forbidden {
    return Err(Error::InvalidIri(iri.to_string()))
  }
  Ok(())
}
