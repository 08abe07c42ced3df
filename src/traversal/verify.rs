use crate::traversal::UNREACHED;

/// First vertex on which two level arrays disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelMismatch {
    pub vertex: usize,
    pub left: i32,
    pub right: i32,
}

/// Checks two level arrays for agreement on every vertex reached by both.
///
/// Vertices unreached in either array impose no constraint. Arrays of
/// different lengths cannot describe the same graph and are inconsistent.
pub fn verify_levels(left: &[i32], right: &[i32]) -> bool {
    left.len() == right.len() && first_level_mismatch(left, right).is_none()
}

/// Locates the first vertex reached by both arrays with differing levels.
pub fn first_level_mismatch(left: &[i32], right: &[i32]) -> Option<LevelMismatch> {
    left.iter()
        .zip(right)
        .enumerate()
        .find(|&(_, (&l, &r))| l != UNREACHED && r != UNREACHED && l != r)
        .map(|(vertex, (&left, &right))| LevelMismatch {
            vertex,
            left,
            right,
        })
}

/// True when both arrays reach exactly the same vertices. Both engines walk
/// the same graph, so a difference here points at a traversal bug even when
/// [`verify_levels`] passes.
pub fn reachability_agrees(left: &[i32], right: &[i32]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(&l, &r)| (l == UNREACHED) == (r == UNREACHED))
}
