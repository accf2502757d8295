use super::InstanceError;

/// A single knapsack item. The id is its position in the instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: usize,
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(id: usize, name: impl Into<String>, weight: f64, value: f64) -> Self {
        Item {
            id,
            name: name.into(),
            weight,
            value,
        }
    }

    /// Value per unit of weight, the greedy part of the desirability.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }
}

/// Validated, immutable list of items shared by every ant of a run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KnapsackInstance {
    items: Vec<Item>,
}

impl KnapsackInstance {
    /// Takes ownership of the items, renumbering them by position.
    /// Items without a positive finite weight or with a negative value are rejected.
    pub fn new(items: Vec<Item>) -> Result<Self, InstanceError> {
        let mut items = items;
        for (id, item) in items.iter_mut().enumerate() {
            item.id = id;
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(InstanceError::NonPositiveWeight(id));
            }
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(InstanceError::NegativeValue(id));
            }
        }

        Ok(KnapsackInstance { items })
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, InstanceError> {
        Self::new(
            pairs
                .iter()
                .enumerate()
                .map(|(id, &(weight, value))| {
                    Item::new(id, format!("item_{}", id), weight, value)
                })
                .collect(),
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn new_renumbers_items() {
        let instance = KnapsackInstance::new(vec![
            Item::new(7, "a", 1.0, 2.0),
            Item::new(3, "b", 2.0, 3.0),
        ])
        .unwrap();

        assert_eq!(instance.items()[0].id, 0);
        assert_eq!(instance.items()[1].id, 1);
        assert_eq!(instance.item(1).unwrap().name, "b");
    }

    #[test]
    fn from_pairs_works() {
        let instance = KnapsackInstance::from_pairs(&[(10.0, 60.0), (20.0, 100.0)]).unwrap();

        assert_eq!(instance.len(), 2);
        assert_eq!(instance.items()[1].name, "item_1");
        assert!(approx_eq!(f64, instance.total_weight(), 30.0));
    }

    #[test]
    fn zero_weight_is_rejected() {
        let result = KnapsackInstance::from_pairs(&[(1.0, 1.0), (0.0, 5.0)]);

        assert_eq!(result, Err(InstanceError::NonPositiveWeight(1)));
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        assert_eq!(
            KnapsackInstance::from_pairs(&[(-1.0, 1.0)]),
            Err(InstanceError::NonPositiveWeight(0))
        );
        assert_eq!(
            KnapsackInstance::from_pairs(&[(f64::NAN, 1.0)]),
            Err(InstanceError::NonPositiveWeight(0))
        );
    }

    #[test]
    fn negative_value_is_rejected() {
        let result = KnapsackInstance::from_pairs(&[(1.0, -2.0)]);

        assert_eq!(result, Err(InstanceError::NegativeValue(0)));
    }

    #[test]
    fn empty_instance_is_valid() {
        let instance = KnapsackInstance::new(Vec::new()).unwrap();

        assert!(instance.is_empty());
    }

    #[test]
    fn ratio_works() {
        let item = Item::new(0, "x", 4.0, 10.0);

        assert!(approx_eq!(f64, item.ratio(), 2.5));
    }
}
