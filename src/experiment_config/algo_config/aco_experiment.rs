use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::metaheuristic::aco::Params;
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct AcoExperiment {
    pub max_weight: f64,
    pub alpha: f64,
    pub beta: f64,
    pub evaporation_rate: f64,
    pub q: f64,
    pub ant_count: usize,
    pub iterations: usize,
    pub seed: u64,
}

impl AcoExperiment {
    pub fn params(&self) -> Params {
        Params {
            max_weight: self.max_weight,
            alpha: self.alpha,
            beta: self.beta,
            evaporation_rate: self.evaporation_rate,
            q: self.q,
            ant_count: self.ant_count,
            iterations: self.iterations,
            seed: Some(self.seed),
        }
    }
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct UnseededAcoExperiment {
    pub max_weight: f64,
    pub alpha: f64,
    pub beta: f64,
    pub evaporation_rate: f64,
    pub q: f64,
    pub ant_count: usize,
    pub iterations: usize,
}

impl Fix<AcoExperiment> for UnseededAcoExperiment {
    fn to_fixed(&self) -> AcoExperiment {
        AcoExperiment {
            max_weight: self.max_weight,
            alpha: self.alpha,
            beta: self.beta,
            evaporation_rate: self.evaporation_rate,
            q: self.q,
            ant_count: self.ant_count,
            iterations: self.iterations,
            seed: (os_random_seed() >> 64) as u64,
        }
    }
}
