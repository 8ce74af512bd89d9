//! Assembles the state space search and the tour reconstruction into a solver of the
//! whole problem.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod telemetry;
pub use self::telemetry::*;

use crate::algorithms::held_karp::{SearchContext, reconstruct_tour};
use crate::models::{Problem, Tour, TourLeg};
use crate::utils::GenericResult;

/// Computes the cheapest tour which visits every city of the problem exactly once.
pub struct Solver {
    telemetry: Telemetry,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(Telemetry::new(TelemetryMode::None))
    }
}

impl Solver {
    /// Creates a new instance of `Solver` with the given telemetry.
    pub fn new(telemetry: Telemetry) -> Self {
        Self { telemetry }
    }

    /// Solves the problem and returns the found tour together with search metrics.
    ///
    /// `None` instead of a tour signals that no valid route exists. An unsupported
    /// amount of cities is reported as an error before any search work is done.
    pub fn solve(&mut self, problem: &Problem) -> GenericResult<(Option<Tour>, Metrics)> {
        self.telemetry.start();

        let mut search = SearchContext::new(&problem.matrix)?;
        self.telemetry.log(
            format!(
                "created a search context for {} cities ({} states)",
                search.city_count(),
                search.state_space_size()
            )
            .as_str(),
        );

        let best_cost = search.run();

        let tour = reconstruct_tour(&search, best_cost).map(|(transitions, total_cost)| Tour {
            legs: transitions
                .into_iter()
                .map(|(from, cost, to)| TourLeg { from, to, cost })
                .collect(),
            total_cost,
        });

        let metrics = self.telemetry.on_result(search.evaluations(), search.state_space_size());

        Ok((tour, metrics))
    }
}
