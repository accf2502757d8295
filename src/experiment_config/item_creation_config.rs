use serde::{Deserialize, Serialize};

use super::{ExperimentConfigError, Fix};
use crate::rng::os_random_seed;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ItemCreationConfig {
    File(FileLoad),
    Uniform(UniformGeneration),
    UnseededUniform(UnseededUniformGeneration),
}

impl ItemCreationConfig {
    pub fn file(&self) -> Result<FileLoad, ExperimentConfigError> {
        match self {
            Self::File(file) => Ok(file.clone()),
            _ => Err(ExperimentConfigError::NotFileBased),
        }
    }

    pub fn uniform(&self) -> Result<UniformGeneration, ExperimentConfigError> {
        match self {
            Self::Uniform(uniform) => Ok(*uniform),
            Self::UnseededUniform(uniform) => Ok(uniform.to_fixed()),
            _ => Err(ExperimentConfigError::NotGenerated),
        }
    }
}

/// Items are read from a `name,weight,value` csv file.
/// Relative paths resolve against the directory of the config file.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct FileLoad {
    pub filename: String,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct UniformGeneration {
    pub count: usize,
    pub weight_range: (f64, f64),
    pub value_range: (f64, f64),
    pub seed: u64,
}

#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct UnseededUniformGeneration {
    pub count: usize,
    pub weight_range: (f64, f64),
    pub value_range: (f64, f64),
}

impl Fix<UniformGeneration> for UnseededUniformGeneration {
    fn to_fixed(&self) -> UniformGeneration {
        UniformGeneration {
            count: self.count,
            weight_range: self.weight_range,
            value_range: self.value_range,
            seed: (os_random_seed() >> 64) as u64,
        }
    }
}
