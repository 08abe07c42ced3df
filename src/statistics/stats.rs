use serde::Serialize;

/// Work counters for a traversal run.
///
/// Each parallel worker owns a private `Stats`; the engine merges them after
/// every level, so no counter is ever shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    edges_scanned: usize,
    claims_won: usize,
    claims_lost: usize,
    levels: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            edges_scanned: 0,
            claims_won: 0,
            claims_lost: 0,
            levels: 0,
        }
    }

    /// Record that a batch of adjacency entries was scanned
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_scanned += edge_amount
    }

    /// Record a successful claim, i.e. a newly discovered vertex
    pub fn bump_claims_won(&mut self) {
        self.claims_won += 1
    }

    /// Record a neighbor that turned out to be claimed already
    pub fn bump_claims_lost(&mut self) {
        self.claims_lost += 1
    }

    /// Record that one more level was fully expanded
    pub fn bump_levels(&mut self) {
        self.levels += 1
    }

    pub fn get_edges_scanned(&self) -> usize {
        self.edges_scanned
    }

    pub fn get_claims_won(&self) -> usize {
        self.claims_won
    }

    pub fn get_claims_lost(&self) -> usize {
        self.claims_lost
    }

    pub fn get_levels(&self) -> usize {
        self.levels
    }

    /// Sums two sets of counters.
    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            edges_scanned: self.edges_scanned + other.edges_scanned,
            claims_won: self.claims_won + other.claims_won,
            claims_lost: self.claims_lost + other.claims_lost,
            levels: self.levels + other.levels,
        }
    }
}
