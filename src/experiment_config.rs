mod algo_config;
mod general_experiment_config;
mod item_creation_config;

pub use algo_config::{AcoExperiment, AlgoConfig, UnseededAcoExperiment};
pub use general_experiment_config::{FullConfig, GeneralExperimentConfig, NoStatConfig};
pub use item_creation_config::{
    FileLoad, ItemCreationConfig, UniformGeneration, UnseededUniformGeneration,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::knapsack::{ImportError, InstanceError};
use crate::metaheuristic::aco::ParamsError;

pub trait Algorithm {
    fn finished(&self) -> bool;
}

#[macro_export]
macro_rules! experiment {
    ($type:ty) => {
        impl Algorithm for $type {
            fn finished(&self) -> bool {
                self.finished
            }
        }
    };
}

/// Turns a partial config into a complete one, drawing missing seeds from the OS.
pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub experiment: GeneralExperimentConfig,
    pub algorithm: AlgoConfig,
    pub items: ItemCreationConfig,
}

impl ExperimentConfig {
    /// The same experiment with every seed resolved and the given finished state.
    pub fn to_fixed(&self, finished: bool) -> Result<Self, ExperimentConfigError> {
        let mut general = self.experiment.cfg();
        general.finished = finished;
        let items = match &self.items {
            ItemCreationConfig::File(file) => ItemCreationConfig::File(file.clone()),
            _ => ItemCreationConfig::Uniform(self.items.uniform()?),
        };

        Ok(ExperimentConfig {
            experiment: GeneralExperimentConfig::Full(general),
            algorithm: AlgoConfig::Aco(self.algorithm.aco()),
            items,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    Yaml,
    Ron,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ExperimentConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ExperimentConfigError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, ExperimentConfigError> {
        match self {
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|err| ExperimentConfigError::Parse(err.to_string())),
            Self::Ron => ron::de::from_str(content)
                .map_err(|err| ExperimentConfigError::Parse(err.to_string())),
        }
    }

    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, ExperimentConfigError> {
        match self {
            Self::Yaml => serde_yaml::to_string(value)
                .map_err(|err| ExperimentConfigError::Parse(err.to_string())),
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|err| ExperimentConfigError::Parse(err.to_string())),
        }
    }
}

/// Reads a yaml or ron file, picking the format by extension.
pub fn load_file<T, P>(path: P) -> Result<T, ExperimentConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content =
        fs::read_to_string(path).map_err(|err| ExperimentConfigError::Io(err.to_string()))?;
    format.parse(&content)
}

pub fn save_file<T, P>(path: P, value: &T) -> Result<(), ExperimentConfigError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    fs::write(path, format.render(value)?)
        .map_err(|err| ExperimentConfigError::Io(err.to_string()))
}

#[derive(Debug)]
pub enum ExperimentConfigError {
    NotFileBased,
    NotGenerated,
    InvalidAlgorithmConfig(ParamsError),
    InvalidItemConfig(String),
    UnsupportedFormat(String),
    Parse(String),
    Io(String),
    InvalidPattern(String),
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFileBased => write!(f, "Config is not a valid file import config."),
            Self::NotGenerated => write!(f, "Config is not a valid generation config."),
            Self::InvalidAlgorithmConfig(err) => write!(f, "{}", err),
            Self::InvalidItemConfig(msg) => write!(f, "{}", msg),
            Self::UnsupportedFormat(file) => {
                write!(f, "Config {} is neither a yaml nor a ron file.", file)
            }
            Self::Parse(msg) => write!(f, "Config could not be parsed: {}", msg),
            Self::Io(msg) => write!(f, "{}", msg),
            Self::InvalidPattern(msg) => write!(f, "Invalid config pattern: {}", msg),
        }
    }
}

impl Error for ExperimentConfigError {}

impl From<ParamsError> for ExperimentConfigError {
    fn from(err: ParamsError) -> Self {
        Self::InvalidAlgorithmConfig(err)
    }
}

impl From<ImportError> for ExperimentConfigError {
    fn from(err: ImportError) -> Self {
        Self::InvalidItemConfig(err.to_string())
    }
}

impl From<InstanceError> for ExperimentConfigError {
    fn from(err: InstanceError) -> Self {
        Self::InvalidItemConfig(err.to_string())
    }
}
