#[cfg(test)]
#[path = "../../../tests/unit/algorithms/held_karp/search_test.rs"]
mod search_test;

use super::*;
use crate::algorithms::structures::BitVec;
use crate::utils::GenericResult;

/// Owns the memoization tables of a single search invocation over the
/// `(current city, visited set)` state space.
///
/// Both tables are flattened arrays addressed by `current * 2^n + visited` and are
/// released together with the context, no state leaks between invocations. Every
/// state is evaluated at most once: a repeated visit short-circuits on the stored
/// value, including states which turned out to be dead ends.
///
/// # Type Parameters
///
/// * `T` - The adjacency specification type that provides transition costs between cities
pub struct SearchContext<'a, T> {
    adjacency: &'a T,
    city_count: usize,
    mask_count: usize,
    full: VisitedSet,
    best_costs: Vec<Cost>,
    successors: Vec<Option<City>>,
    computed: BitVec,
    evaluations: usize,
}

impl<'a, T> SearchContext<'a, T>
where
    T: TransitionCost,
{
    /// Creates a new instance of [`SearchContext`] for the given adjacency, allocating
    /// the state tables.
    ///
    /// Fails fast when the amount of cities is outside the `[1, 64]` range or when the
    /// state space does not fit the address space.
    pub fn new(adjacency: &'a T) -> GenericResult<Self> {
        let city_count = adjacency.size();
        if !(1..=MAX_CITIES).contains(&city_count) {
            return Err(format!(
                "unsupported city count: {city_count}, expected a value in [1, {MAX_CITIES}] range"
            )
            .into());
        }

        let too_large =
            || format!("state space of {city_count} cities exceeds the addressable memory");
        let mask_count = 1_usize.checked_shl(city_count as u32).ok_or_else(too_large)?;
        let table_len = mask_count.checked_mul(city_count).ok_or_else(too_large)?;

        Ok(Self {
            adjacency,
            city_count,
            mask_count,
            full: VisitedSet::full(city_count),
            best_costs: vec![NO_PATH; table_len],
            successors: vec![None; table_len],
            computed: BitVec::new(table_len),
            evaluations: 0,
        })
    }

    /// Runs the search from the start state and returns the minimum cost of visiting
    /// all cities exactly once, [`NO_PATH`] when no complete route exists.
    pub fn run(&mut self) -> Cost {
        self.solve(START_CITY, VisitedSet::start())
    }

    /// Returns the minimum cost to visit all cities missing from `visited` starting at
    /// the `current` city. The cost of the closing transition back to the start city is
    /// not included.
    ///
    /// Expects `current` to be within bounds and present in `visited`. Recursion depth
    /// is bound by the amount of cities.
    pub fn solve(&mut self, current: City, visited: VisitedSet) -> Cost {
        debug_assert!(current < self.city_count);
        debug_assert!(visited.contains(current));

        if visited == self.full {
            return 0;
        }

        let state = self.state_index(current, visited);
        if self.computed.get(state) {
            return self.best_costs[state];
        }

        self.evaluations += 1;

        let mut min_cost = NO_PATH;
        let mut best_city = None;

        for next in 0..self.city_count {
            if visited.contains(next) {
                continue;
            }

            let transition = self.adjacency.cost(current, next);
            if transition == NO_PATH {
                continue;
            }

            // a dead end below reports the sentinel, saturation keeps the candidate one too
            let candidate = transition.saturating_add(self.solve(next, visited.with(next)));

            // strict comparison keeps the lowest city index on equal costs
            if candidate < min_cost {
                min_cost = candidate;
                best_city = Some(next);
            }
        }

        self.best_costs[state] = min_cost;
        self.successors[state] = best_city;
        self.computed.set(state);

        min_cost
    }

    /// Returns the stored best cost of the given state, [`NO_PATH`] when the state is a
    /// dead end or was never reached.
    pub fn best_cost(&self, current: City, visited: VisitedSet) -> Cost {
        self.best_costs[self.state_index(current, visited)]
    }

    /// Returns the stored optimal successor of the given state, `None` when the state
    /// is terminal, a dead end, or was never reached.
    pub fn successor(&self, current: City, visited: VisitedSet) -> Option<City> {
        self.successors[self.state_index(current, visited)]
    }

    /// Returns the amount of states evaluated so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Returns the total size of the state space.
    pub fn state_space_size(&self) -> usize {
        self.best_costs.len()
    }

    /// Returns the amount of cities in the problem.
    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Returns the adjacency information used by the search.
    pub fn adjacency(&self) -> &T {
        self.adjacency
    }

    fn state_index(&self, current: City, visited: VisitedSet) -> usize {
        debug_assert!(current < self.city_count);
        debug_assert!((visited.as_mask() as usize) < self.mask_count);

        current * self.mask_count + visited.as_mask() as usize
    }
}
