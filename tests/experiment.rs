use std::fs;

use knapsack_aco::experiment::Experiment;
use knapsack_aco::experiment_config::{
    load_file, AlgoConfig, ExperimentConfig, ExperimentConfigError,
};
use knapsack_aco::metaheuristic::aco::Params;

const ITEMS: &str = "name,weight,value
server,10,60
router,20,100
switch,30,120
";

const CONFIG: &str = "
experiment:
  aggregation_rate: 5
algorithm:
  max_weight: 50
  alpha: 1.0
  beta: 2.0
  evaporation_rate: 0.5
  q: 100.0
  ant_count: 5
  iterations: 20
items:
  filename: items.csv
";

#[test]
fn run_glob_runs_and_marks_configs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.csv"), ITEMS).unwrap();
    fs::write(dir.path().join("small.yml"), CONFIG).unwrap();
    let pattern = format!("{}/*.yml", dir.path().display());

    let summaries = Experiment::run_glob(&pattern, dir.path()).unwrap();

    assert_eq!(summaries.len(), 1);
    let best_value = summaries[0].best_value.unwrap();
    assert!(best_value > 0.0 && best_value <= 220.0);

    let output = fs::read_to_string(dir.path().join("small.csv")).unwrap();
    // header plus one row per five iterations
    assert_eq!(output.lines().count(), 5);

    let rewritten: ExperimentConfig = load_file(dir.path().join("small.yml")).unwrap();
    assert!(rewritten.experiment.cfg().finished);
    assert!(matches!(rewritten.algorithm, AlgoConfig::Aco(_)));

    let again = Experiment::run_glob(&pattern, dir.path()).unwrap();
    assert!(again[0].skipped());
}

const RON_CONFIG: &str = "(
    experiment: (aggregation_rate: 4),
    algorithm: (
        max_weight: 50.0,
        alpha: 1.0,
        beta: 2.0,
        evaporation_rate: 0.5,
        q: 100.0,
        ant_count: 5,
        iterations: 8,
    ),
    items: (filename: \"items.csv\"),
)";

#[test]
fn run_file_handles_ron_configs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("items.csv"), ITEMS).unwrap();
    let config = dir.path().join("small.ron");
    fs::write(&config, RON_CONFIG).unwrap();

    let summary = Experiment::run_file(&config, dir.path().join("small.csv")).unwrap();

    assert!(!summary.skipped());
    let output = fs::read_to_string(dir.path().join("small.csv")).unwrap();
    // header plus one row per four iterations
    assert_eq!(output.lines().count(), 3);

    let rewritten: ExperimentConfig = load_file(&config).unwrap();
    assert!(rewritten.experiment.cfg().finished);
    match rewritten.algorithm {
        AlgoConfig::Aco(aco) => assert_eq!(aco.iterations, 8),
        other => panic!("expected a seeded config, got {:?}", other),
    }

    let again = Experiment::run_file(&config, dir.path().join("small.csv")).unwrap();
    assert!(again.skipped());
}

#[test]
fn run_file_reports_missing_items() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.yaml");
    fs::write(&config, CONFIG).unwrap();

    let result = Experiment::run_file(&config, dir.path().join("broken.csv"));

    assert!(matches!(
        result,
        Err(ExperimentConfigError::InvalidItemConfig(_))
    ));
}

#[test]
fn params_load_from_ron() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.ron");
    fs::write(&path, "(max_weight: 30.0, ant_count: 3, seed: Some(4))").unwrap();

    let params: Params = load_file(&path).unwrap();

    assert_eq!(
        params,
        Params::default()
            .with_max_weight(30.0)
            .with_ant_count(3)
            .with_seed(4)
    );
}

#[test]
fn params_load_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.yaml");
    fs::write(&path, "evaporation_rate: 0.25\niterations: 12\n").unwrap();

    let params: Params = load_file(&path).unwrap();

    assert_eq!(params.evaporation_rate, 0.25);
    assert_eq!(params.iterations, 12);
    assert_eq!(params.ant_count, 10);
}
