//! Entity normalizer.
//!
//! Turns a list response into the two-structure representation the stores
//! keep: an insertion-ordered ID sequence plus an ID-to-record map. Consumers
//! iterate the sequence for display order and use the map for point lookups.

use std::collections::HashMap;

use super::Entity;

/// A list of records split into ordered keys and keyed records.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<E: Entity> {
    pub id_list: Vec<E::Id>,
    pub entity_dict: HashMap<E::Id, E>,
}

impl<E: Entity> Default for Normalized<E> {
    fn default() -> Self {
        Self {
            id_list: Vec::new(),
            entity_dict: HashMap::new(),
        }
    }
}

/// Normalizes `records` preserving arrival order.
///
/// A key that appears more than once keeps its first position; the later
/// record replaces the earlier one.
pub fn normalize<E: Entity>(records: Vec<E>) -> Normalized<E> {
    let mut id_list = Vec::with_capacity(records.len());
    let mut entity_dict = HashMap::with_capacity(records.len());

    for record in records {
        let id = record.id();
        if entity_dict.insert(id, record).is_none() {
            id_list.push(id);
        }
    }

    Normalized {
        id_list,
        entity_dict,
    }
}
