type Source<E> = Box<E>;

pub type Result<T> = std::result::Result<T, OntologyError>;

#[derive(Debug)]
pub enum OntologyError {
  Io(Source<std::io::Error>),
  Json(Source<serde_json::Error>),
  Turtle(Source<rio_turtle::TurtleError>),
  Serialize(Source<std::io::Error>),
  InvalidIri(String),
  InvalidConfig(String),
}
impl std::error::Error for OntologyError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use OntologyError::*;
    match self {
      Io(e) => Some(&**e),
      Json(e) => Some(&**e),
      Turtle(e) => Some(&**e),
      Serialize(e) => Some(&**e),
      _ => None,
    }
  }
}
impl std::fmt::Display for OntologyError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    use OntologyError::*;
    match self {
      Io(e) => write!(f, "{}", *e),
      Json(e) => write!(f, "Process records are not valid JSON: {}", *e),
      Turtle(e) => write!(f, "Could not parse Turtle: {}", *e),
      Serialize(e) => write!(f, "Error writing RDF: {}", *e),
      InvalidIri(iri) => write!(f, "Refusing to serialize <{}>, it is not a valid IRI", iri),
      InvalidConfig(reason) => write!(f, "Invalid ontology configuration: {}", reason),
    }
  }
}
impl From<std::io::Error> for OntologyError {
  fn from(err: std::io::Error) -> OntologyError {
    OntologyError::Io(Box::new(err))
  }
}
impl From<serde_json::Error> for OntologyError {
  fn from(err: serde_json::Error) -> OntologyError {
    OntologyError::Json(Box::new(err))
  }
}
impl From<rio_turtle::TurtleError> for OntologyError {
  fn from(err: rio_turtle::TurtleError) -> OntologyError {
    OntologyError::Turtle(Box::new(err))
  }
}
