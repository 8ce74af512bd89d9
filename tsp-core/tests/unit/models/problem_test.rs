use super::*;

#[test]
fn can_register_each_name_once() {
    let mut registry = CityRegistry::default();

    assert_eq!(registry.get_or_insert("Athens"), 0);
    assert_eq!(registry.get_or_insert("Berlin"), 1);
    assert_eq!(registry.get_or_insert("Athens"), 0);
    assert_eq!(registry.len(), 2);
}

#[test]
fn can_return_names_by_index() {
    let mut registry = CityRegistry::default();
    registry.get_or_insert("Athens");
    registry.get_or_insert("Berlin");

    assert_eq!(registry.name(0), Some("Athens"));
    assert_eq!(registry.name(1), Some("Berlin"));
    assert_eq!(registry.name(2), None);
}

#[test]
fn can_distinguish_names_by_exact_equality() {
    let mut registry = CityRegistry::default();

    assert_eq!(registry.get_or_insert("Athens"), 0);
    assert_eq!(registry.get_or_insert("athens"), 1);
    assert_eq!(registry.get_or_insert("Athens "), 2);
}

#[test]
fn can_reject_mismatched_matrix() {
    let mut cities = CityRegistry::default();
    cities.get_or_insert("Athens");
    cities.get_or_insert("Berlin");

    assert!(Problem::new(cities, CostMatrix::new(3)).is_err());
}
