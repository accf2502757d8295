/// Pheromone level per item, indexed like the items of the instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneTrail {
    levels: Vec<f64>,
}

impl PheromoneTrail {
    pub const INITIAL_LEVEL: f64 = 1.0;

    pub fn new(len: usize) -> Self {
        PheromoneTrail {
            levels: vec![Self::INITIAL_LEVEL; len],
        }
    }

    /// Multiplies every level by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for level in self.levels.iter_mut() {
            *level *= keep;
        }
    }

    /// Adds `amount` to the level of item `id`.
    ///
    /// # Panics
    ///
    /// If `id` is not an item of the instance this trail was built for.
    pub fn deposit(&mut self, id: usize, amount: f64) {
        self.levels[id] += amount;
    }

    /// # Panics
    ///
    /// If `id` is not an item of the instance this trail was built for.
    pub fn level(&self, id: usize) -> f64 {
        self.levels[id]
    }

    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
