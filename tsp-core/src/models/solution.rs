use crate::algorithms::held_karp::{City, Cost};

/// A single leg of a tour between two cities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourLeg {
    /// An index of the city the leg departs from.
    pub from: City,
    /// An index of the city the leg arrives at.
    pub to: City,
    /// A travel cost of the leg.
    pub cost: Cost,
}

/// An ordered sequence of legs visiting every city exactly once, together with the
/// accumulated total cost. A single city instance has no legs and zero cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    /// Tour legs in visiting order.
    pub legs: Vec<TourLeg>,
    /// A sum of the leg costs.
    pub total_cost: Cost,
}
