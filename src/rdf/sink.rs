use crate::{RdfNode, RdfTriple};

/* Anything triples can be emitted into. Emission code only
  ever sees this trait, never a concrete buffer or writer. */
pub trait TripleSink {
  /* Required */
  fn add(&mut self, triple: RdfTriple);
  /* Provided */
  fn add_named(&mut self, subject: &str, predicate: &str, object: &str) {
    self.add([RdfNode::named(subject), RdfNode::named(predicate), RdfNode::named(object)]);
  }
  fn add_literal(&mut self, subject: &str, predicate: &str, value: &str) {
    self.add([RdfNode::named(subject), RdfNode::named(predicate), RdfNode::literal(value)]);
  }
}

/* Triples in emission order. No uniqueness is enforced,
  emitting the same statement twice stores it twice. */
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TripleBuffer {
  triples: Vec<RdfTriple>,
}
impl TripleBuffer {
  pub fn new() -> Self {
    TripleBuffer {
      triples: Vec::new(),
    }
  }
  pub fn len(&self) -> usize {
    self.triples.len()
  }
  pub fn is_empty(&self) -> bool {
    self.triples.is_empty()
  }
  pub fn as_slice(&self) -> &[RdfTriple] {
    &self.triples
  }
  /// Drops structurally equal repeats, keeping the first occurrence in place.
  pub fn dedup(&mut self) -> usize {
    use std::collections::HashSet;
    let before = self.triples.len();
    let mut seen: HashSet<RdfTriple> = HashSet::with_capacity(before);
    self.triples.retain(|triple| seen.insert(triple.clone()));
    before - self.triples.len()
  }
}
impl TripleSink for TripleBuffer {
  fn add(&mut self, triple: RdfTriple) {
    self.triples.push(triple);
  }
}
impl TripleSink for Vec<RdfTriple> {
  fn add(&mut self, triple: RdfTriple) {
    self.push(triple);
  }
}
