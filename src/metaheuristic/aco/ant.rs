use oorandom::Rand64;

use crate::knapsack::Item;
use crate::metaheuristic::aco::{Params, PheromoneTrail};
use crate::metaheuristic::Solution;
use crate::rng::{rng64, shuffle};

pub struct Ant {
    id: usize,
    rng: Rand64,
    solution: Solution,
}

impl Ant {
    pub fn new(id: usize, rng_seed: u128) -> Self {
        Ant {
            id,
            rng: rng64(rng_seed),
            solution: Solution::empty(0),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Desirability of an item, compared as is against a uniform draw.
    /// Values above one mean the item is always taken when it fits.
    pub fn desirability(item: &Item, pheromone_level: f64, params: &Params) -> f64 {
        pheromone_level.powf(params.alpha) * item.ratio().powf(params.beta)
    }

    /// Builds a fresh solution by visiting the items in random order and taking every
    /// affordable item whose desirability beats a uniform draw.
    pub fn construct(
        &mut self,
        items: &[Item],
        pheromone: &PheromoneTrail,
        params: &Params,
    ) -> &Solution {
        let mut solution = Solution::empty(items.len());
        let mut order: Vec<usize> = (0..items.len()).collect();
        shuffle(&mut self.rng, &mut order);

        for id in order {
            let item = &items[id];
            if solution.total_weight + item.weight > params.max_weight {
                continue;
            }

            let desirability = Self::desirability(item, pheromone.level(id), params);
            if self.rng.rand_float() < desirability {
                solution.select(item);
            }
        }

        self.solution = solution;
        &self.solution
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Amount laid on each selected item.
    pub fn deposit_amount(&self, q: f64) -> f64 {
        q * self.solution.total_value / (1.0 + self.solution.total_weight)
    }

    pub fn reinforce(&self, pheromone: &mut PheromoneTrail, q: f64) {
        let amount = self.deposit_amount(q);
        for id in self.solution.iter_selected_ids() {
            pheromone.deposit(id, amount);
        }
    }
}
