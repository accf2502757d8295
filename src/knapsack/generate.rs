use oorandom::Rand64;
use std::ops::Range;

use super::{InstanceError, Item, KnapsackInstance};

pub trait Generate {
    fn generate(&mut self) -> Result<KnapsackInstance, InstanceError>;
}

/// Generates `count` items with weights and values drawn uniformly from the given ranges.
pub struct UniformItems<'a> {
    count: usize,
    weight_range: Range<f64>,
    value_range: Range<f64>,
    rng: &'a mut Rand64,
}

impl<'a> UniformItems<'a> {
    pub fn new(
        count: usize,
        weight_range: (f64, f64),
        value_range: (f64, f64),
        rng: &'a mut Rand64,
    ) -> Self {
        UniformItems {
            count,
            weight_range: weight_range.0..weight_range.1,
            value_range: value_range.0..value_range.1,
            rng,
        }
    }

    fn sample(rng: &mut Rand64, range: &Range<f64>) -> f64 {
        rng.rand_float() * (range.end - range.start) + range.start
    }
}

impl<'a> Generate for UniformItems<'a> {
    fn generate(&mut self) -> Result<KnapsackInstance, InstanceError> {
        if self.weight_range.start <= 0.0 {
            return Err(InstanceError::NonPositiveWeight(0));
        }

        let mut items = Vec::with_capacity(self.count);
        for id in 0..self.count {
            let weight = Self::sample(self.rng, &self.weight_range);
            let value = Self::sample(self.rng, &self.value_range);
            items.push(Item::new(id, format!("item_{}", id), weight, value));
        }

        KnapsackInstance::new(items)
    }
}
