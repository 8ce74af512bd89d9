#[cfg(test)]
#[path = "../../tests/unit/models/problem_test.rs"]
mod problem_test;

use crate::algorithms::held_karp::City;
use crate::models::CostMatrix;
use crate::utils::GenericResult;
use rustc_hash::FxHashMap;

/// An ordered registry of distinct city names. A name gets a zero based index on its
/// first registration, identity is exact string equality, and an index once assigned
/// never changes.
#[derive(Clone, Debug, Default)]
pub struct CityRegistry {
    names: Vec<String>,
    indices: FxHashMap<String, City>,
}

impl CityRegistry {
    /// Returns the index of the city with the given name, registering the name on
    /// first use.
    pub fn get_or_insert(&mut self, name: &str) -> City {
        if let Some(&index) = self.indices.get(name) {
            index
        } else {
            let index = self.names.len();
            self.names.push(name.to_string());
            self.indices.insert(name.to_string(), index);
            index
        }
    }

    /// Returns the name assigned to the given index.
    pub fn name(&self, city: City) -> Option<&str> {
        self.names.get(city).map(String::as_str)
    }

    /// Returns the amount of registered cities.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks whether no city was registered yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Defines a TSP instance: an ordered set of cities and the travel costs between them.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Registered cities, index aligned with the cost matrix.
    pub cities: CityRegistry,
    /// Travel costs between the cities.
    pub matrix: CostMatrix,
}

impl Problem {
    /// Creates a problem, checking that the matrix dimension matches the amount of
    /// registered cities.
    pub fn new(cities: CityRegistry, matrix: CostMatrix) -> GenericResult<Self> {
        if cities.len() != matrix.size() {
            return Err(format!(
                "cost matrix size {} does not match the amount of cities {}",
                matrix.size(),
                cities.len()
            )
            .into());
        }

        Ok(Self { cities, matrix })
    }
}
