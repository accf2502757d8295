use serde::{Deserialize, Serialize};

use crate::experiment;
use crate::experiment_config::{Algorithm, Fix};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum GeneralExperimentConfig {
    Full(FullConfig),
    NoStat(NoStatConfig),
}

impl GeneralExperimentConfig {
    pub fn cfg(&self) -> FullConfig {
        match self {
            Self::Full(cfg) => *cfg,
            Self::NoStat(cfg) => cfg.to_fixed(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FullConfig {
    pub finished: bool,
    pub aggregation_rate: usize,
}

experiment! {FullConfig}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NoStatConfig {
    pub aggregation_rate: usize,
}

impl Fix<FullConfig> for NoStatConfig {
    fn to_fixed(&self) -> FullConfig {
        FullConfig {
            finished: false,
            aggregation_rate: self.aggregation_rate,
        }
    }
}
