use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::experiment_config::{
    load_file, save_file, Algorithm, ExperimentConfig, ExperimentConfigError, ItemCreationConfig,
};
use crate::knapsack::{import_csv, Generate, KnapsackInstance, UniformItems};
use crate::metaheuristic::aco::{AcoResult, CsvSupervisor};
use crate::metaheuristic::{Aco, Metaheuristic, ProblemInstance};
use crate::rng::rng64;

/// What happened to a single experiment file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentSummary {
    pub config: PathBuf,
    pub output: PathBuf,
    /// `None` if the experiment was already finished and got skipped.
    pub best_value: Option<f64>,
}

impl ExperimentSummary {
    pub fn skipped(&self) -> bool {
        self.best_value.is_none()
    }
}

pub struct Experiment {}

impl Experiment {
    /// Builds the instance described by the item part of a config.
    /// Relative csv paths are resolved against `base_dir`.
    pub fn load_items(
        items: &ItemCreationConfig,
        base_dir: &Path,
    ) -> Result<KnapsackInstance, ExperimentConfigError> {
        if let Ok(file) = items.file() {
            let path = base_dir.join(&file.filename);
            Ok(import_csv(path)?)
        } else {
            let uniform = items.uniform()?;
            let mut rng = rng64(uniform.seed as u128);
            let mut generator = UniformItems::new(
                uniform.count,
                uniform.weight_range,
                uniform.value_range,
                &mut rng,
            );
            Ok(generator.generate()?)
        }
    }

    /// Runs a fully seeded config, writing iteration statistics as csv to `output`.
    pub fn run_config<W: Write>(
        config: &ExperimentConfig,
        instance: &KnapsackInstance,
        output: W,
    ) -> Result<AcoResult, ExperimentConfigError> {
        let experiment_cfg = config.experiment.cfg();
        let params = config.algorithm.aco().params();
        let supervisor =
            CsvSupervisor::new(experiment_cfg.aggregation_rate, Writer::from_writer(output));
        let mut aco = Aco::new(ProblemInstance::new(instance), params, supervisor)?;
        let result = aco.run();
        aco.supervisor
            .flush()
            .map_err(|err| ExperimentConfigError::Io(err.to_string()))?;

        Ok(result)
    }

    /// Runs the experiment described in the file at `path` unless it is already finished.
    /// Afterwards the config is written back with all seeds resolved and marked finished.
    pub fn run_file<P: AsRef<Path>, Q: AsRef<Path>>(
        path: P,
        output: Q,
    ) -> Result<ExperimentSummary, ExperimentConfigError> {
        let path = path.as_ref();
        let output = output.as_ref();
        let config: ExperimentConfig = load_file(path)?;
        let mut summary = ExperimentSummary {
            config: path.to_path_buf(),
            output: output.to_path_buf(),
            best_value: None,
        };

        if config.experiment.cfg().finished() {
            warn!(config = %path.display(), "experiment already finished, skipping");
            return Ok(summary);
        }

        let fixed = config.to_fixed(false)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let instance = Self::load_items(&fixed.items, base_dir)?;
        let file =
            File::create(output).map_err(|err| ExperimentConfigError::Io(err.to_string()))?;
        let result = Self::run_config(&fixed, &instance, file)?;

        save_file(path, &fixed.to_fixed(true)?)?;
        info!(
            config = %path.display(),
            best_value = result.best_value,
            "experiment finished"
        );
        summary.best_value = Some(result.best_value);

        Ok(summary)
    }

    /// Runs every config matching the glob pattern, writing `<config stem>.csv` into `out_dir`.
    pub fn run_glob<P: AsRef<Path>>(
        pattern: &str,
        out_dir: P,
    ) -> Result<Vec<ExperimentSummary>, ExperimentConfigError> {
        let out_dir = out_dir.as_ref();
        let paths = glob::glob(pattern)
            .map_err(|err| ExperimentConfigError::InvalidPattern(err.to_string()))?;

        let mut summaries = Vec::new();
        for entry in paths {
            let path = entry.map_err(|err| ExperimentConfigError::Io(err.to_string()))?;
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "experiment".to_string());
            let output = out_dir.join(format!("{}.csv", stem));
            summaries.push(Self::run_file(&path, output)?);
        }

        Ok(summaries)
    }
}
