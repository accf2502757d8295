use serde::Serialize;
use std::time::Duration;

/// Statistics about a single colony iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Message {
    pub iteration: usize,
    pub best_value: f64,
    pub best_weight: f64,
    pub iteration_best_value: f64,
    pub mean_value: f64,
    pub improvements: usize,
    pub cpu_time_us: u64,
}

impl Message {
    pub fn new(
        iteration: usize,
        best_value: f64,
        best_weight: f64,
        iteration_best_value: f64,
        mean_value: f64,
        improvements: usize,
        cpu_time: Duration,
    ) -> Self {
        Self {
            iteration,
            best_value,
            best_weight,
            iteration_best_value,
            mean_value,
            improvements,
            cpu_time_us: cpu_time.as_micros() as u64,
        }
    }

    /// Folds a later message into this one. Counters and times add up,
    /// values are taken from the later message.
    pub fn merge(&mut self, later: &Message) {
        *self = Self {
            iteration: later.iteration,
            best_value: later.best_value,
            best_weight: later.best_weight,
            iteration_best_value: later.iteration_best_value,
            mean_value: later.mean_value,
            improvements: self.improvements + later.improvements,
            cpu_time_us: self.cpu_time_us + later.cpu_time_us,
        };
    }
}
