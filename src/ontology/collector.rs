/*
  First pass over the input: deduplicate business objects and
  business processes, and remember which object (and which
  subprocesses) each process is connected to.
*/

use {
  bimap::BiBTreeMap,
  crate::{
    ontology::entity_set::EntitySet,
    records::{valid_name, ProcessRecord, SubprocessRecord},
  },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEntry {
  pub connected_business_object: Option<String>,
  pub subprocesses: Vec<SubprocessRecord>,
}

/* Keyed by process or subprocess name, kept in registration
  order so output is reproducible. */
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RelationMap {
  keys: BiBTreeMap<String, usize>,
  entries: Vec<RelationEntry>,
}
impl RelationMap {
  pub fn new() -> Self {
    RelationMap {
      keys: BiBTreeMap::new(),
      entries: Vec::new(),
    }
  }
  /// First registration wins, later ones are ignored and return false.
  pub fn register(&mut self, name: &str, entry: RelationEntry) -> bool {
    if self.keys.contains_left(name) {
      return false
    }
    self.keys.insert(name.to_string(), self.entries.len());
    self.entries.push(entry);
    true
  }
  pub fn get(&self, name: &str) -> Option<&RelationEntry> {
    self.keys.get_by_left(name).map(|&pos| &self.entries[pos])
  }
  pub fn len(&self) -> usize {
    self.entries.len()
  }
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
  pub fn iter(&self) -> impl Iterator<Item = (&str, &RelationEntry)> + '_ {
    self.entries
      .iter()
      .enumerate()
      .filter_map(move |(pos, entry)| {
        self.keys.get_by_right(&pos).map(|name| (name.as_str(), entry))
      })
  }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Collection {
  pub business_objects: EntitySet,
  pub business_processes: EntitySet,
  pub relations: RelationMap,
}

pub fn collect(records: &[ProcessRecord]) -> Collection {
  let mut collection = Collection::default();
  for record in records {
    let object = valid_name(record.object.as_deref());
    if let Some(object) = object {
      collection.business_objects.insert(object);
    }
    match valid_name(record.name.as_deref()) {
      Some(name) => collection.register_process(name, RelationEntry {
        connected_business_object: object.map(str::to_string),
        subprocesses: record.subprocesses.clone(),
      }),
      None => tracing::debug!(object = ?record.object, "dropping process record without a usable name"),
    }
    for subprocess in &record.subprocesses {
      let sub_object = valid_name(subprocess.object.as_deref());
      if let Some(sub_object) = sub_object {
        collection.business_objects.insert(sub_object);
      }
      match valid_name(subprocess.name.as_deref()) {
        /* Subprocesses are leaves, they never carry their own subprocesses */
        Some(sub_name) => collection.register_process(sub_name, RelationEntry {
          connected_business_object: sub_object.map(str::to_string),
          subprocesses: Vec::new(),
        }),
        None => tracing::debug!(object = ?subprocess.object, "dropping subprocess without a usable name"),
      }
    }
  }
  collection
}

impl Collection {
  fn register_process(&mut self, name: &str, entry: RelationEntry) {
    if self.business_processes.insert(name) {
      self.relations.register(name, entry);
    }
  }
}
