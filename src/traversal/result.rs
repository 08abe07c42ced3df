use crate::graph::NodeId;

/// Level of a vertex that the traversal never reached.
pub const UNREACHED: i32 = -1;

/// Output of a BFS run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// Vertices in the order they were claimed. Within a level the order
    /// depends on the engine; across levels it is always non-decreasing.
    pub order: Vec<NodeId>,
    /// Hop distance from the start vertex, [`UNREACHED`] if none.
    pub levels: Vec<i32>,
}

impl Traversal {
    /// Number of vertices reached, start vertex included.
    pub fn reached(&self) -> usize {
        self.order.len()
    }

    pub fn level_of(&self, node: NodeId) -> Option<u32> {
        self.levels
            .get(node.index())
            .and_then(|&level| u32::try_from(level).ok())
    }

    /// Largest level reached.
    pub fn depth(&self) -> u32 {
        self.levels
            .iter()
            .copied()
            .max()
            .and_then(|level| u32::try_from(level).ok())
            .unwrap_or(0)
    }

    /// Number of vertices per level, index `d` holding the size of level `d`.
    pub fn level_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        for &level in &self.levels {
            let Ok(level) = usize::try_from(level) else {
                continue;
            };
            if sizes.len() <= level {
                sizes.resize(level + 1, 0);
            }
            sizes[level] += 1;
        }
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Traversal {
        Traversal {
            order: [0, 2, 1, 3].map(NodeId::new).to_vec(),
            levels: vec![0, 1, 1, 2, UNREACHED],
        }
    }

    #[test]
    fn accessors() {
        let t = sample();
        assert_eq!(t.reached(), 4);
        assert_eq!(t.depth(), 2);
        assert_eq!(t.level_of(NodeId::new(3)), Some(2));
        assert_eq!(t.level_of(NodeId::new(4)), None);
        assert_eq!(t.level_of(NodeId::new(99)), None);
    }

    #[test]
    fn level_sizes_skip_unreached() {
        assert_eq!(sample().level_sizes(), vec![1, 2, 1]);
    }
}
