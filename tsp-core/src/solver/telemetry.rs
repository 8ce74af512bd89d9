//! A module which provides simple logging and metrics about the search execution.

use crate::utils::Timer;
use std::ops::Deref;
use std::sync::Arc;

/// A logger type which is called with information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Encapsulates measurements regarding a single solve run.
pub struct Metrics {
    /// Search duration in milliseconds.
    pub duration: u128,
    /// Amount of states which were actually evaluated.
    pub evaluated_states: usize,
    /// Total size of the state space.
    pub state_space_size: usize,
}

/// Specifies a telemetry mode.
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
    },
}

/// Provides a way to write information about the search progress into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Restarts the internal timer.
    pub fn start(&mut self) {
        self.time = Timer::start();
    }

    /// Writes a log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger } = &self.mode {
            logger.deref()(format!("[{}s] {}", self.time.elapsed_secs(), message).as_str())
        }
    }

    /// Reports the final statistics and returns the collected metrics.
    pub fn on_result(&self, evaluated_states: usize, state_space_size: usize) -> Metrics {
        let duration = self.time.elapsed_millis();

        self.log(
            format!("evaluated {evaluated_states} of {state_space_size} states in {duration}ms")
                .as_str(),
        );

        Metrics { duration, evaluated_states, state_space_size }
    }
}
