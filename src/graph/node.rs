use std::fmt::{Debug, Display};

/// Index of a vertex in an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
///
/// Stored as a `u32` to halve the footprint of neighbor lists; converted to
/// `usize` whenever it is used to index per-vertex arrays.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId {
    pub internal: u32,
}

impl NodeId {
    pub const fn new(internal: u32) -> Self {
        NodeId { internal }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.internal as usize
    }
}

impl From<u32> for NodeId {
    fn from(internal: u32) -> Self {
        NodeId { internal }
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.internal)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal)
    }
}
