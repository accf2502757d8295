mod ant;
mod message;
mod params;
mod pheromone;
mod supervisor;

pub use ant::Ant;
pub use message::Message;
pub use params::{Params, ParamsError};
pub use pheromone::PheromoneTrail;
pub use supervisor::{CsvSupervisor, ProgressSupervisor};

use crate::knapsack::KnapsackInstance;
use crate::metaheuristic::{Metaheuristic, ProblemInstance, Solution, Supervisor};
use crate::rng::{derive_seed, rng64};

use oorandom::Rand64;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a full colony run.
#[derive(Debug, Clone, PartialEq)]
pub struct AcoResult {
    /// `None` if no ant ever selected an item with positive value.
    pub best_solution: Option<Solution>,
    pub best_value: f64,
    pub iterations: usize,
}

/// Validates the parameters and runs a colony on the instance for the configured iterations.
pub fn solve<S: Supervisor>(
    instance: &KnapsackInstance,
    params: Params,
    supervisor: S,
) -> Result<AcoResult, ParamsError> {
    let mut aco = Aco::new(ProblemInstance::new(instance), params, supervisor)?;
    Ok(aco.run())
}

pub struct Aco<'a, S: Supervisor> {
    instance: &'a KnapsackInstance,
    pheromone: PheromoneTrail,
    params: Params,
    best_solution: Option<Solution>,
    best_value: f64,
    iteration: usize,
    rng: Rand64,
    pub supervisor: S,
}

impl<'a, S: Supervisor> Aco<'a, S> {
    /// Runs the remaining iterations and returns the best solution found.
    pub fn run(&mut self) -> AcoResult {
        while self.iteration < self.params.iterations {
            self.single_iteration();
        }

        info!(
            iterations = self.iteration,
            best_value = self.best_value,
            "colony finished"
        );

        AcoResult {
            best_solution: self.best_solution.clone(),
            best_value: self.best_value,
            iterations: self.iteration,
        }
    }

    pub fn best_solution(&self) -> Option<&Solution> {
        self.best_solution.as_ref()
    }

    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    pub fn pheromone(&self) -> &PheromoneTrail {
        &self.pheromone
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Number of iterations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    fn spawn_ants(&mut self) -> Vec<Ant> {
        let mut ants = Vec::with_capacity(self.params.ant_count);
        for id in 0..self.params.ant_count {
            ants.push(Ant::new(id, derive_seed(&mut self.rng)));
        }
        ants
    }

    #[cfg(not(feature = "parallel"))]
    fn construct_all(&self, ants: &mut [Ant]) {
        for ant in ants.iter_mut() {
            ant.construct(self.instance.items(), &self.pheromone, &self.params);
        }
    }

    #[cfg(feature = "parallel")]
    fn construct_all(&self, ants: &mut [Ant]) {
        use rayon::prelude::*;

        let items = self.instance.items();
        let pheromone = &self.pheromone;
        let params = &self.params;
        ants.par_iter_mut().for_each(|ant| {
            ant.construct(items, pheromone, params);
        });
    }
}

impl<'a, S: Supervisor> Metaheuristic<'a, Params, S> for Aco<'a, S> {
    type Error = ParamsError;

    fn new(
        problem: ProblemInstance<'a>,
        params: Params,
        supervisor: S,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        let instance = problem.instance();

        Ok(Aco {
            instance,
            pheromone: PheromoneTrail::new(instance.len()),
            params,
            best_solution: None,
            best_value: 0.0,
            iteration: 0,
            rng: rng64(params.seed_or_random()),
            supervisor,
        })
    }

    fn single_iteration(&mut self) -> Option<&Solution> {
        let start_time = Instant::now();
        let mut ants = self.spawn_ants();
        // all ants read the same trail, it is only touched once every ant is done
        self.construct_all(&mut ants);

        let mut improvements = 0;
        let mut iteration_best_value = 0.0;
        let mut value_sum = 0.0;
        for ant in ants.iter() {
            let solution = ant.solution();
            value_sum += solution.total_value;
            if solution.total_value > iteration_best_value {
                iteration_best_value = solution.total_value;
            }

            // strictly better only, so the first of equal solutions is kept
            if solution.total_value > self.best_value {
                improvements += 1;
                self.best_value = solution.total_value;
                self.best_solution = Some(solution.clone());
                info!(
                    iteration = self.iteration,
                    ant = ant.id(),
                    best_value = self.best_value,
                    "found better solution"
                );
            }
        }

        self.pheromone.evaporate(self.params.evaporation_rate);
        for ant in ants.iter() {
            ant.reinforce(&mut self.pheromone, self.params.q);
        }

        let best_weight = self
            .best_solution
            .as_ref()
            .map_or(0.0, |solution| solution.total_weight);
        let message = Message::new(
            self.iteration,
            self.best_value,
            best_weight,
            iteration_best_value,
            value_sum / ants.len() as f64,
            improvements,
            start_time.elapsed(),
        );
        debug!(
            iteration = self.iteration,
            best_value = self.best_value,
            iteration_best_value,
            "iteration finished"
        );
        self.supervisor.notify(&message, self.best_solution.as_ref());
        self.iteration += 1;

        if improvements > 0 {
            self.best_solution.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn instance() -> KnapsackInstance {
        KnapsackInstance::from_pairs(&[(10.0, 60.0), (20.0, 100.0)]).unwrap()
    }

    fn flat_params() -> Params {
        Params::default()
            .with_max_weight(30.0)
            .with_alpha(0.0)
            .with_beta(0.0)
            .with_ant_count(1)
            .with_iterations(1)
            .with_seed(1)
    }

    #[test]
    fn new_rejects_invalid_params() {
        let instance = instance();
        let result = Aco::new(
            ProblemInstance::new(&instance),
            Params::default().with_ant_count(0),
            (),
        );

        assert!(matches!(result, Err(ParamsError::NoAnts)));
    }

    #[test]
    fn new_initializes_trail() {
        let instance = instance();
        let aco = Aco::new(ProblemInstance::new(&instance), flat_params(), ()).unwrap();

        assert_eq!(aco.pheromone().levels(), &[1.0, 1.0]);
        assert_eq!(aco.best_solution(), None);
        assert_eq!(aco.iteration(), 0);
    }

    #[test]
    fn single_ant_takes_both_items() {
        let result = solve(&instance(), flat_params(), ()).unwrap();
        let best = result.best_solution.unwrap();

        assert_eq!(best.flags(), vec![1, 1]);
        assert!(approx_eq!(f64, best.total_weight, 30.0));
        assert!(approx_eq!(f64, result.best_value, 160.0));
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn single_iteration_reports_improvement_once() {
        let instance = instance();
        let mut aco = Aco::new(
            ProblemInstance::new(&instance),
            flat_params().with_iterations(3),
            (),
        )
        .unwrap();

        assert!(aco.single_iteration().is_some());
        // the optimum is found in the first iteration, nothing can improve on it
        assert!(aco.single_iteration().is_none());
        assert_eq!(aco.iteration(), 2);
    }

    #[test]
    fn reinforcement_follows_evaporation() {
        let instance = KnapsackInstance::from_pairs(&[(10.0, 60.0)]).unwrap();
        let mut aco = Aco::new(ProblemInstance::new(&instance), flat_params(), ()).unwrap();
        aco.single_iteration();

        let expected = 0.5 + 100.0 * 60.0 / 11.0;
        assert!(approx_eq!(f64, aco.pheromone().level(0), expected, ulps = 4));
    }

    #[test]
    fn empty_instance_has_no_solution() {
        let instance = KnapsackInstance::new(Vec::new()).unwrap();
        let result = solve(&instance, flat_params().with_iterations(5), ()).unwrap();

        assert_eq!(result.best_solution, None);
        assert_eq!(result.best_value, 0.0);
    }

    #[test]
    fn equal_solutions_keep_the_first() {
        let instance = KnapsackInstance::from_pairs(&[(10.0, 60.0)]).unwrap();
        let mut messages = Vec::new();
        {
            let mut aco = Aco::new(
                ProblemInstance::new(&instance),
                flat_params().with_ant_count(4).with_iterations(2),
                |message: &Message, _best: Option<&Solution>| messages.push(*message),
            )
            .unwrap();
            aco.run();
        }

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].improvements, 1);
        assert_eq!(messages[1].improvements, 0);
        assert!(approx_eq!(f64, messages[0].mean_value, 60.0));
    }

    #[test]
    fn supervisor_sees_current_best() {
        let instance = instance();
        let mut seen = Vec::new();
        solve(
            &instance,
            flat_params().with_iterations(2),
            |message: &Message, best: Option<&Solution>| {
                seen.push((message.iteration, best.map(|s| s.total_value)))
            },
        )
        .unwrap();

        assert_eq!(seen, vec![(0, Some(160.0)), (1, Some(160.0))]);
    }

    #[test]
    fn run_only_runs_remaining_iterations() {
        let instance = instance();
        let mut aco = Aco::new(
            ProblemInstance::new(&instance),
            flat_params().with_iterations(4),
            (),
        )
        .unwrap();
        aco.single_iteration();

        assert_eq!(aco.run().iterations, 4);
        assert_eq!(aco.run().iterations, 4);
    }
}
