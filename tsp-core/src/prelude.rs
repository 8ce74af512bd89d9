//! This module reimports the commonly used types.

// Reimport algorithm types
pub use crate::algorithms::held_karp::{City, Cost, MAX_CITIES, NO_PATH, START_CITY, VisitedSet};

// Reimport model types
pub use crate::models::{CityRegistry, CostMatrix, Problem, Tour, TourLeg};

// Reimport solver types
pub use crate::solver::{InfoLogger, Metrics, Solver, Telemetry, TelemetryMode};

// Reimport utils
pub use crate::utils::{GenericError, GenericResult, Timer};
