pub mod experiment;
pub mod experiment_config;
pub mod knapsack;
pub mod metaheuristic;
pub mod rng;
