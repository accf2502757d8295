pub mod aco;
mod solution;
mod supervisor;

use crate::knapsack::KnapsackInstance;
pub use aco::Aco;
pub use solution::{solution_value_and_weight, Solution, SolutionError};
pub use supervisor::Supervisor;

pub trait Metaheuristic<'a, Params, SupervisorType> {
    type Error;

    fn new(
        problem: ProblemInstance<'a>,
        params: Params,
        supervisor: SupervisorType,
    ) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Runs one iteration, returning the best solution if it improved.
    fn single_iteration(&mut self) -> Option<&Solution>;
}

pub struct ProblemInstance<'a> {
    instance: &'a KnapsackInstance,
}

impl<'a> ProblemInstance<'a> {
    pub fn new(instance: &'a KnapsackInstance) -> Self {
        ProblemInstance { instance }
    }

    pub fn instance(&self) -> &'a KnapsackInstance {
        self.instance
    }
}
