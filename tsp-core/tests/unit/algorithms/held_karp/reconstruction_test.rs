use super::*;
use crate::helpers::*;
use crate::models::CostMatrix;

#[test]
fn can_reconstruct_closed_three_city_tour() {
    let matrix = create_three_city_matrix();
    let mut search = SearchContext::new(&matrix).expect("cannot create search context");
    let best_cost = search.run();

    let (transitions, total) = reconstruct_tour(&search, best_cost).expect("no tour found");

    assert_eq!(transitions, vec![(0, 787, 1), (1, 2015, 2), (2, 2451, 0)]);
    assert_eq!(total, 5253);
}

#[test]
fn can_skip_walking_for_infeasible_instance() {
    let matrix = CostMatrix::new(2);
    let mut search = SearchContext::new(&matrix).expect("cannot create search context");
    let best_cost = search.run();

    assert_eq!(best_cost, NO_PATH);
    assert_eq!(reconstruct_tour(&search, best_cost), None);
}

#[test]
fn can_reconstruct_single_city_tour() {
    let matrix = CostMatrix::new(1);
    let mut search = SearchContext::new(&matrix).expect("cannot create search context");
    let best_cost = search.run();

    assert_eq!(best_cost, 0);
    assert_eq!(reconstruct_tour(&search, best_cost), Some((vec![], 0)));
}

#[test]
fn can_keep_route_open_without_return_edge() {
    // a directed path covers all cities, but nothing connects the last one back
    let matrix = create_matrix(3, &[(0, 1, 1), (1, 2, 2)]);
    let mut search = SearchContext::new(&matrix).expect("cannot create search context");
    let best_cost = search.run();

    let (transitions, total) = reconstruct_tour(&search, best_cost).expect("no tour found");

    assert_eq!(transitions, vec![(0, 1, 1), (1, 2, 2)]);
    assert_eq!(total, best_cost);
}
