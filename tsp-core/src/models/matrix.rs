#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::algorithms::held_karp::{City, Cost, NO_PATH, TransitionCost};

/// A dense square matrix of directed travel costs between cities, using [`NO_PATH`]
/// for absent edges. Built once before solving and immutable afterwards.
#[derive(Clone, Debug)]
pub struct CostMatrix {
    costs: Vec<Cost>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with no edges set.
    pub fn new(size: usize) -> Self {
        Self { costs: vec![NO_PATH; size * size], size }
    }

    /// Sets the cost of the directed edge between two cities.
    pub fn set(&mut self, from: City, to: City, cost: Cost) {
        let index = self.index_of(from, to);
        self.costs[index] = cost;
    }

    /// Sets the same cost for both directions of the edge between two cities.
    pub fn set_symmetric(&mut self, from: City, to: City, cost: Cost) {
        self.set(from, to, cost);
        self.set(to, from, cost);
    }

    /// Returns the cost of the directed edge between two cities.
    pub fn get(&self, from: City, to: City) -> Cost {
        self.costs[self.index_of(from, to)]
    }

    /// Returns the amount of cities covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index_of(&self, from: City, to: City) -> usize {
        assert!(from < self.size && to < self.size, "edge ({from}, {to}) is out of bounds");
        from * self.size + to
    }
}

impl TransitionCost for CostMatrix {
    fn cost(&self, from: City, to: City) -> Cost {
        self.get(from, to)
    }

    fn size(&self) -> usize {
        self.size
    }
}
