use std::ops::RangeInclusive;

/// Largest philosopher count the loader accepts.
pub const MAX_PHILOSOPHERS: usize = 1 << 20;

/// Undirected conflict graph over philosophers `1..=n`.
///
/// Adjacency is kept per philosopher in insertion order; index 0 is unused so
/// philosopher ids can be used directly. Duplicate edges are kept as they
/// were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGraph {
    num_philosopher: usize,
    adjacency: Vec<Vec<usize>>,
    num_edge: usize,
}

impl ConflictGraph {
    /// `num_philosopher` must not exceed [`MAX_PHILOSOPHERS`].
    pub fn new(num_philosopher: usize) -> ConflictGraph {
        debug_assert!(num_philosopher <= MAX_PHILOSOPHERS);
        ConflictGraph {
            num_philosopher,
            adjacency: vec![Vec::new(); num_philosopher + 1],
            num_edge: 0,
        }
    }

    pub fn philosopher_count(&self) -> usize {
        self.num_philosopher
    }

    pub fn philosophers(&self) -> RangeInclusive<usize> {
        1..=self.num_philosopher
    }

    pub fn contains(&self, p: usize) -> bool {
        p >= 1 && p <= self.num_philosopher
    }

    /// Records the bottle shared by `p1` and `p2` in both adjacency lists.
    ///
    /// Callers check the bounds; an index outside `1..=n` panics.
    pub fn add_edge(&mut self, p1: usize, p2: usize) {
        debug_assert!(self.contains(p1) && self.contains(p2));
        self.adjacency[p1].push(p2);
        self.adjacency[p2].push(p1);
        self.num_edge += 1;
    }

    pub fn neighbors(&self, p: usize) -> &[usize] {
        match self.adjacency.get(p) {
            Some(neighbors) if p != 0 => neighbors,
            _ => &[],
        }
    }

    pub fn edge_count(&self) -> usize {
        self.num_edge
    }

    pub fn max_degree(&self) -> usize {
        self.philosophers()
            .map(|p| self.adjacency[p].len())
            .max()
            .unwrap_or(0)
    }
}
