use bimap::BiBTreeMap;

/* Names are mapped to the position they were first seen at,
  positions are dense so iterating 0..len walks the set in
  insertion order. */
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
  dict: BiBTreeMap<String, usize>,
}
impl EntitySet {
  pub fn new() -> Self {
    EntitySet {
      dict: BiBTreeMap::new(),
    }
  }
  /// Returns false if the name was already present, the set is left untouched.
  pub fn insert(&mut self, name: &str) -> bool {
    if self.dict.contains_left(name) {
      return false
    }
    let pos = self.dict.len();
    self.dict.insert(name.to_string(), pos);
    true
  }
  pub fn contains(&self, name: &str) -> bool {
    self.dict.contains_left(name)
  }
  pub fn len(&self) -> usize {
    self.dict.len()
  }
  pub fn is_empty(&self) -> bool {
    self.dict.is_empty()
  }
  pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
    (0..self.dict.len())
      .filter_map(move |pos| self.dict.get_by_right(&pos))
      .map(String::as_str)
  }
}
impl<'a> std::iter::FromIterator<&'a str> for EntitySet {
  fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
    let mut set = EntitySet::new();
    for name in iter {
      set.insert(name);
    }
    set
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  #[test]
  fn keeps_first_seen_order() {
    let set: EntitySet = vec!["Subgrade", "Road Surface", "Subgrade", "Bitumen"]
      .into_iter()
      .collect();
    assert_eq!(set.len(), 3);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Subgrade", "Road Surface", "Bitumen"]);
  }
  #[test]
  fn case_sensitive() {
    let mut set = EntitySet::new();
    assert!(set.insert("material"));
    assert!(set.insert("Material"));
    assert!(!set.insert("Material"));
    assert!(set.contains("material"));
    assert!(!set.contains("MATERIAL"));
  }
  #[test]
  fn empty_set() {
    let set = EntitySet::new();
    assert!(set.is_empty());
    assert_eq!(set.iter().next(), None);
  }
}
