//! An exact solver for the Traveling Salesman Problem based on the Held-Karp
//! dynamic programming algorithm.
//!
//! The search works over `(current city, visited set)` states, where the visited
//! set is a bitmask with one bit per city. Memoization collapses the exponential
//! amount of partial routes into at most `n * 2^n` state evaluations.

mod reconstruction;
pub use self::reconstruction::reconstruct_tour;

mod search;
pub use self::search::SearchContext;

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/held_karp/held_karp_test.rs"]
mod held_karp_test;

/// A city is a zero based index into the cost matrix.
pub type City = usize;

/// Represents a non-negative travel cost between two cities.
pub type Cost = u64;

/// A sentinel value which denotes a missing edge or an unreachable state. It is larger
/// than any sum of real costs can get with saturating arithmetic.
pub const NO_PATH: Cost = Cost::MAX;

/// The maximum amount of cities which fits the visited set representation.
pub const MAX_CITIES: usize = 64;

/// The city every tour starts from.
pub const START_CITY: City = 0;

/// Provides the travel costs between cities for the search.
pub trait TransitionCost {
    /// Returns a cost of the directed transition between two cities,
    /// [`NO_PATH`] when the cities are not connected.
    fn cost(&self, from: City, to: City) -> Cost;

    /// Returns the total amount of cities.
    fn size(&self) -> usize;
}

/// A set of visited cities encoded as a bitmask, one bit per city.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitedSet(u64);

impl VisitedSet {
    /// Creates a set with only the start city visited.
    pub fn start() -> Self {
        Self(1 << START_CITY)
    }

    /// Creates a set with all cities of the problem visited.
    pub fn full(city_count: usize) -> Self {
        assert!(
            (1..=MAX_CITIES).contains(&city_count),
            "unsupported city count: {city_count}"
        );

        // NOTE a left shift of a u64 by 64 is not defined, so the full mask
        // is derived from the all-ones value instead
        Self(u64::MAX >> (MAX_CITIES - city_count))
    }

    /// Checks whether the given city is in the set.
    pub fn contains(&self, city: City) -> bool {
        debug_assert!(city < MAX_CITIES);
        self.0 & (1 << city) != 0
    }

    /// Returns a new set with the given city added.
    pub fn with(&self, city: City) -> Self {
        debug_assert!(city < MAX_CITIES);
        Self(self.0 | (1 << city))
    }

    /// Returns the raw bitmask value.
    pub fn as_mask(&self) -> u64 {
        self.0
    }
}
