#[cfg(test)]
#[path = "../../../tests/unit/algorithms/held_karp/reconstruction_test.rs"]
mod reconstruction_test;

use super::*;

/// Walks the populated successor table from the start state and emits the ordered
/// sequence of `(from, cost, to)` transitions together with the accumulated total cost.
///
/// `best_cost` is the value returned by solving the start state: when it equals
/// [`NO_PATH`], the table is not walked at all and `None` reports that no valid route
/// exists. The walked transitions sum up exactly to `best_cost`; the closing transition
/// back to the start city is not a part of the recurrence and is appended afterwards
/// when the corresponding edge exists.
pub fn reconstruct_tour<T: TransitionCost>(
    search: &SearchContext<'_, T>,
    best_cost: Cost,
) -> Option<(Vec<(City, Cost, City)>, Cost)> {
    if best_cost == NO_PATH {
        return None;
    }

    let mut transitions = Vec::with_capacity(search.city_count());
    let mut current = START_CITY;
    let mut visited = VisitedSet::start();
    let mut total = 0;

    // every step adds one city to the visited set, so the walk is bound by the city count
    while let Some(next) = search.successor(current, visited) {
        let cost = search.adjacency().cost(current, next);
        transitions.push((current, cost, next));
        total += cost;
        visited = visited.with(next);
        current = next;
    }

    debug_assert_eq!(total, best_cost);

    if current != START_CITY {
        let cost = search.adjacency().cost(current, START_CITY);
        if cost != NO_PATH {
            transitions.push((current, cost, START_CITY));
            total = total.saturating_add(cost);
        }
    }

    Some((transitions, total))
}
