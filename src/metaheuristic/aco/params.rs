use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::rng::os_random_seed;

/// Parameters of a colony run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Capacity of the knapsack.
    pub max_weight: f64,
    /// Exponent applied to the pheromone level.
    pub alpha: f64,
    /// Exponent applied to the value/weight ratio.
    pub beta: f64,
    /// Fraction of pheromone removed every iteration.
    pub evaporation_rate: f64,
    /// Scale of the pheromone deposit.
    pub q: f64,
    pub ant_count: usize,
    pub iterations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_weight: 100.0,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            q: 100.0,
            ant_count: 10,
            iterations: 300,
            seed: None,
        }
    }
}

impl Params {
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_ant_count(mut self, ant_count: usize) -> Self {
        self.ant_count = ant_count;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configured seed, or a fresh one from the OS.
    pub fn seed_or_random(&self) -> u128 {
        self.seed.map(u128::from).unwrap_or_else(os_random_seed)
    }

    /// Rejects parameters the colony can't run with. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(ParamsError::EvaporationRate(self.evaporation_rate));
        }
        if self.ant_count == 0 {
            return Err(ParamsError::NoAnts);
        }
        if self.iterations == 0 {
            return Err(ParamsError::NoIterations);
        }
        if self.max_weight.is_nan() || self.max_weight < 0.0 {
            return Err(ParamsError::NegativeCapacity(self.max_weight));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(ParamsError::NonFiniteExponent);
        }
        if !self.q.is_finite() || self.q < 0.0 {
            return Err(ParamsError::NonFiniteDeposit(self.q));
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ParamsError {
    EvaporationRate(f64),
    NoAnts,
    NoIterations,
    NegativeCapacity(f64),
    NonFiniteExponent,
    NonFiniteDeposit(f64),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvaporationRate(rate) => {
                write!(f, "Evaporation rate {} is not within [0, 1].", rate)
            }
            Self::NoAnts => write!(f, "At least one ant is required."),
            Self::NoIterations => write!(f, "At least one iteration is required."),
            Self::NegativeCapacity(max_weight) => {
                write!(f, "Knapsack capacity {} must not be negative.", max_weight)
            }
            Self::NonFiniteExponent => write!(f, "Alpha and beta must be finite."),
            Self::NonFiniteDeposit(q) => {
                write!(f, "Deposit constant {} must be finite and non negative.", q)
            }
        }
    }
}

impl Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = Params::default();

        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.ant_count, 10);
        assert_eq!(params.iterations, 300);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn evaporation_rate_bounds_are_inclusive() {
        assert_eq!(Params::default().with_evaporation_rate(0.0).validate(), Ok(()));
        assert_eq!(Params::default().with_evaporation_rate(1.0).validate(), Ok(()));
    }

    #[test]
    fn evaporation_rate_outside_bounds_is_rejected() {
        assert_eq!(
            Params::default().with_evaporation_rate(1.5).validate(),
            Err(ParamsError::EvaporationRate(1.5))
        );
        assert_eq!(
            Params::default().with_evaporation_rate(-0.1).validate(),
            Err(ParamsError::EvaporationRate(-0.1))
        );
        assert!(Params::default()
            .with_evaporation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn zero_ants_is_rejected() {
        assert_eq!(
            Params::default().with_ant_count(0).validate(),
            Err(ParamsError::NoAnts)
        );
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert_eq!(
            Params::default().with_iterations(0).validate(),
            Err(ParamsError::NoIterations)
        );
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(
            Params::default().with_max_weight(-1.0).validate(),
            Err(ParamsError::NegativeCapacity(-1.0))
        );
        assert_eq!(Params::default().with_max_weight(0.0).validate(), Ok(()));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            Params::default().with_alpha(f64::INFINITY).validate(),
            Err(ParamsError::NonFiniteExponent)
        );
        assert_eq!(
            Params::default().with_q(-3.0).validate(),
            Err(ParamsError::NonFiniteDeposit(-3.0))
        );
    }

    #[test]
    fn seed_or_random_prefers_configured_seed() {
        assert_eq!(Params::default().with_seed(9).seed_or_random(), 9);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params: Params = serde_yaml::from_str("max_weight: 30\nant_count: 3\n").unwrap();

        assert_eq!(params.ant_count, 3);
        assert_eq!(params.iterations, 300);
        assert_eq!(params, Params::default().with_max_weight(30.0).with_ant_count(3));
    }
}
