//! Entity trait shared by every normalized collection.

use std::fmt::Debug;
use std::hash::Hash;

/// A domain record uniquely identified by an integer key.
///
/// Implemented by every record a resource store keeps normalized
/// (employees, reviews, feedback requests).
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Key type used in `id_list` and as the `entity_dict` key.
    type Id: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// Returns the record's key.
    fn id(&self) -> Self::Id;
}
