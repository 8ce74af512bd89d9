#[cfg(test)]
#[path = "../../tests/unit/formats/pairs_test.rs"]
mod pairs_test;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use tsp_core::prelude::*;

/// A maximum allowed length of a single city name.
const MAX_NAME_LENGTH: usize = 511;

/// Reads a problem from the pairs format: one edge per line as `City1-City2: Distance`.
/// The distance is assigned to both directions of the pair, cities get their indices in
/// order of first appearance.
pub fn read_pairs_format<R: Read>(reader: BufReader<R>) -> GenericResult<Problem> {
    PairsReader { reader, buffer: String::new(), cities: CityRegistry::default(), edges: vec![] }
        .read_problem()
}

/// Provides a way to read a problem from the pairs format.
pub trait PairsProblem {
    /// Reads the problem definition.
    fn read_pairs(&self) -> GenericResult<Problem>;
}

impl PairsProblem for File {
    fn read_pairs(&self) -> GenericResult<Problem> {
        read_pairs_format(BufReader::new(self))
    }
}

impl PairsProblem for String {
    fn read_pairs(&self) -> GenericResult<Problem> {
        read_pairs_format(BufReader::new(self.as_bytes()))
    }
}

struct EdgeLine {
    from: City,
    to: City,
    distance: Cost,
}

struct PairsReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    cities: CityRegistry,
    edges: Vec<EdgeLine>,
}

impl<R: Read> PairsReader<R> {
    fn read_problem(mut self) -> GenericResult<Problem> {
        while self.read_line()? != 0 {
            let edge = self.parse_edge()?;
            self.edges.push(edge);
        }

        if self.cities.is_empty() {
            return Err("input is empty or contains no valid data".into());
        }

        if self.cities.len() > MAX_CITIES {
            return Err(
                format!("too many cities: {}, maximum is {MAX_CITIES}", self.cities.len()).into()
            );
        }

        let mut matrix = CostMatrix::new(self.cities.len());
        self.edges.iter().for_each(|edge| matrix.set_symmetric(edge.from, edge.to, edge.distance));

        Problem::new(self.cities, matrix)
    }

    fn parse_edge(&mut self) -> GenericResult<EdgeLine> {
        let line = self.buffer.trim_end_matches(['\r', '\n']);

        // a city name cannot contain the pair separator, the split happens at its first occurrence
        let (from, rest) =
            line.split_once('-').ok_or_else(|| format!("cannot parse line: '{line}'"))?;
        let (to, distance) =
            rest.split_once(':').ok_or_else(|| format!("cannot parse line: '{line}'"))?;

        if from.is_empty() || to.is_empty() {
            return Err(format!("city name is missing in line: '{line}'").into());
        }

        if from.len() > MAX_NAME_LENGTH || to.len() > MAX_NAME_LENGTH {
            return Err(format!(
                "city name exceeds the maximum allowed length of {MAX_NAME_LENGTH} characters"
            )
            .into());
        }

        let distance = distance
            .trim()
            .parse::<Cost>()
            .map_err(|err| format!("cannot parse distance in line '{line}': {err}"))?;

        Ok(EdgeLine {
            from: self.cities.get_or_insert(from),
            to: self.cities.get_or_insert(to),
            distance,
        })
    }

    fn read_line(&mut self) -> GenericResult<usize> {
        self.buffer.clear();
        self.reader.read_line(&mut self.buffer).map_err(|err| err.into())
    }
}
