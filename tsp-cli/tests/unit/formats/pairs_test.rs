use super::*;

fn read_pairs(content: &str) -> GenericResult<Problem> {
    content.to_string().read_pairs()
}

#[test]
fn can_read_three_city_problem() {
    let problem = read_pairs("Athens-Berlin: 787\nBerlin-Cairo: 2015\nCairo-Athens: 2451\n")
        .expect("cannot read problem");

    assert_eq!(problem.cities.len(), 3);
    assert_eq!(problem.cities.name(0), Some("Athens"));
    assert_eq!(problem.cities.name(1), Some("Berlin"));
    assert_eq!(problem.cities.name(2), Some("Cairo"));
    assert_eq!(problem.matrix.get(0, 1), 787);
    assert_eq!(problem.matrix.get(1, 0), 787);
    assert_eq!(problem.matrix.get(1, 2), 2015);
    assert_eq!(problem.matrix.get(2, 0), 2451);
    assert_eq!(problem.matrix.get(0, 0), NO_PATH);
}

#[test]
fn can_register_cities_in_order_of_first_appearance() {
    let problem = read_pairs("Cairo-Berlin: 1\nAthens-Cairo: 2\n").expect("cannot read problem");

    assert_eq!(problem.cities.name(0), Some("Cairo"));
    assert_eq!(problem.cities.name(1), Some("Berlin"));
    assert_eq!(problem.cities.name(2), Some("Athens"));
}

#[test]
fn can_overwrite_repeated_edges() {
    let problem = read_pairs("Athens-Berlin: 787\nAthens-Berlin: 800\n").expect("cannot read problem");

    assert_eq!(problem.cities.len(), 2);
    assert_eq!(problem.matrix.get(0, 1), 800);
}

#[test]
fn can_read_distance_without_spacing() {
    let problem = read_pairs("Athens-Berlin:787\n").expect("cannot read problem");

    assert_eq!(problem.matrix.get(0, 1), 787);
}

parameterized_test! {can_reject_malformed_lines, line, {
    assert!(read_pairs(line).is_err());
}}

can_reject_malformed_lines! {
    case_01_no_separators: "Athens Berlin 787",
    case_02_no_colon: "Athens-Berlin 787",
    case_03_bad_distance: "Athens-Berlin: a lot",
    case_04_negative_distance: "Athens-Berlin: -787",
    case_05_missing_first_name: "-Berlin: 787",
    case_06_blank_line_inside: "Athens-Berlin: 787\n\nBerlin-Cairo: 2015",
}

#[test]
fn can_reject_empty_input() {
    let result = read_pairs("");

    assert!(result.err().is_some_and(|err| err.to_string().contains("no valid data")));
}

#[test]
fn can_reject_too_long_city_name() {
    let line = format!("{}-Berlin: 1", "A".repeat(512));

    let result = read_pairs(line.as_str());

    assert!(result.err().is_some_and(|err| err.to_string().contains("maximum allowed length")));
}

#[test]
fn can_reject_too_many_cities() {
    let content =
        (1..=64).map(|city| format!("C0-C{city}: 1")).collect::<Vec<_>>().join("\n");

    let result = read_pairs(content.as_str());

    assert!(result.err().is_some_and(|err| err.to_string().contains("too many cities")));
}

#[test]
fn can_read_up_to_maximum_cities() {
    let content =
        (1..=63).map(|city| format!("C0-C{city}: 1")).collect::<Vec<_>>().join("\n");

    let problem = read_pairs(content.as_str()).expect("cannot read problem");

    assert_eq!(problem.cities.len(), 64);
}
