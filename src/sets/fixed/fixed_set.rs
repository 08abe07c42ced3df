use std::fmt::Debug;

use crate::graph::NodeId;

/// A trait for immutable neighbor sets.
///
/// This abstraction provides a uniform interface for reading the neighbor
/// relationships of a graph vertex.
pub trait FixedSet: Debug {
    /// Borrows the neighbor indices, in ascending order.
    fn as_slice(&self) -> &[NodeId];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Membership test. Relies on the ascending-order guarantee of `as_slice`.
    fn contains(&self, node: NodeId) -> bool {
        self.as_slice().binary_search(&node).is_ok()
    }
}

/// An immutable, sorted, duplicate-free set of neighbor indices.
pub struct FlatFixedSet {
    neighbors: Box<[NodeId]>,
}

impl FlatFixedSet {
    /// Creates a neighbor set from arbitrary indices.
    ///
    /// The indices are sorted and duplicates are removed, so the resulting
    /// order is deterministic regardless of insertion order.
    pub fn from_unsorted(mut initial_values: Vec<NodeId>) -> Self {
        initial_values.sort_unstable();
        initial_values.dedup();
        FlatFixedSet {
            neighbors: initial_values.into_boxed_slice(),
        }
    }
}

impl FixedSet for FlatFixedSet {
    #[inline]
    fn as_slice(&self) -> &[NodeId] {
        &self.neighbors
    }
}

impl Debug for FlatFixedSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedSet")
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
