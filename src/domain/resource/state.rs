//! Normalized collection state held by a resource store.

use std::collections::HashMap;

use super::{Entity, Normalized};

/// Snapshot of one entity collection.
///
/// Replaced wholesale on every transition; consumers only ever see whole
/// values. Between transitions every key in `id_list` has exactly one record
/// in `entity_dict` and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<E: Entity> {
    pub(crate) is_fetching: bool,
    pub(crate) id_list: Vec<E::Id>,
    pub(crate) entity_dict: HashMap<E::Id, E>,
}

impl<E: Entity> Default for ResourceState<E> {
    fn default() -> Self {
        Self {
            is_fetching: false,
            id_list: Vec::new(),
            entity_dict: HashMap::new(),
        }
    }
}

impl<E: Entity> ResourceState<E> {
    /// Builds a settled state from an already normalized list.
    pub fn from_normalized(normalized: Normalized<E>) -> Self {
        Self {
            is_fetching: false,
            id_list: normalized.id_list,
            entity_dict: normalized.entity_dict,
        }
    }

    /// True while an operation is outstanding for the owning store.
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Known keys in display order.
    pub fn id_list(&self) -> &[E::Id] {
        &self.id_list
    }

    /// Keyed records.
    pub fn entity_dict(&self) -> &HashMap<E::Id, E> {
        &self.entity_dict
    }

    pub fn get(&self, id: &E::Id) -> Option<&E> {
        self.entity_dict.get(id)
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.entity_dict.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.id_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_list.is_empty()
    }

    /// Records in `id_list` order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.id_list.iter().filter_map(|id| self.entity_dict.get(id))
    }

    /// Checks the list/dict pairing: no duplicate keys, no orphans.
    pub fn is_consistent(&self) -> bool {
        if self.id_list.len() != self.entity_dict.len() {
            return false;
        }
        let mut seen = std::collections::HashSet::with_capacity(self.id_list.len());
        self.id_list
            .iter()
            .all(|id| seen.insert(*id) && self.entity_dict.contains_key(id))
    }
}
