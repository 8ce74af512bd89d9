#[cfg(test)]
#[path = "../../tests/unit/formats/output_test.rs"]
mod output_test;

use serde::Serialize;
use std::io::{BufWriter, Write};
use tsp_core::prelude::*;

/// Writes the tour in a human readable text form: one line per leg with the travel
/// cost, followed by the total. An absent tour is reported as a single line.
pub fn write_text_tour<W: Write>(
    writer: BufWriter<W>,
    problem: &Problem,
    tour: Option<&Tour>,
) -> GenericResult<()> {
    let mut writer = writer;

    let Some(tour) = tour else {
        writer.write_all("No valid TSP route found.\n".as_bytes())?;
        return Ok(());
    };

    writer.write_all("We will visit the cities in the following order:\n".as_bytes())?;

    for leg in &tour.legs {
        let from = city_name(problem, leg.from)?;
        let to = city_name(problem, leg.to)?;
        writer.write_all(format!("{} -( {} )-> {}\n", from, leg.cost, to).as_bytes())?;
    }

    writer.write_all(format!("Total cost: {}\n", tour.total_cost).as_bytes())?;

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TourDto<'a> {
    tour: Vec<LegDto<'a>>,
    total_cost: Cost,
}

#[derive(Serialize)]
struct LegDto<'a> {
    from: &'a str,
    to: &'a str,
    cost: Cost,
}

#[derive(Serialize)]
struct NoRouteDto {
    error: &'static str,
}

/// Writes the tour as a JSON document.
pub fn write_json_tour<W: Write>(
    writer: BufWriter<W>,
    problem: &Problem,
    tour: Option<&Tour>,
) -> GenericResult<()> {
    let result = match tour {
        Some(tour) => {
            let legs = tour
                .legs
                .iter()
                .map(|leg| {
                    Ok(LegDto {
                        from: city_name(problem, leg.from)?,
                        to: city_name(problem, leg.to)?,
                        cost: leg.cost,
                    })
                })
                .collect::<GenericResult<Vec<_>>>()?;

            serde_json::to_writer_pretty(writer, &TourDto { tour: legs, total_cost: tour.total_cost })
        }
        None => serde_json::to_writer_pretty(writer, &NoRouteDto { error: "no valid TSP route found" }),
    };

    result.map_err(|err| format!("cannot serialize tour: {err}").into())
}

fn city_name(problem: &Problem, city: City) -> GenericResult<&str> {
    problem.cities.name(city).ok_or_else(|| format!("no name registered for city {city}").into())
}
