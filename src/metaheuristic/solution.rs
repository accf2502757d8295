use crate::knapsack::{Item, KnapsackInstance};

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Recomputes value and weight of a solution from the items of the instance.
pub fn solution_value_and_weight(
    solution: &Solution,
    instance: &KnapsackInstance,
) -> Result<(f64, f64), SolutionError> {
    if solution.len() != instance.len() {
        return Err(SolutionError::LengthMismatch {
            expected: instance.len(),
            found: solution.len(),
        });
    }

    Ok(solution
        .iter_selected_ids()
        .map(|id| &instance.items()[id])
        .fold((0.0, 0.0), |acc, item| {
            (acc.0 + item.value, acc.1 + item.weight)
        }))
}

#[derive(Debug, PartialEq)]
pub enum SolutionError {
    LengthMismatch { expected: usize, found: usize },
}

impl Display for SolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, found } => write!(
                f,
                "Solution covers {} items, but the instance has {}.",
                found, expected
            ),
        }
    }
}

impl Error for SolutionError {}

/// Inclusion flags for every item of an instance, plus the running totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    selected: Vec<bool>,
    pub total_value: f64,
    pub total_weight: f64,
}

impl Solution {
    /// A solution over `n` items with nothing selected.
    pub fn empty(n: usize) -> Self {
        Solution {
            selected: vec![false; n],
            total_value: 0.0,
            total_weight: 0.0,
        }
    }

    /// Marks the item as selected and adds its weight and value.
    /// Selecting an already selected item, or one outside this solution, does nothing.
    pub fn select(&mut self, item: &Item) {
        if let Some(selected) = self.selected.get_mut(item.id) {
            if !*selected {
                *selected = true;
                self.total_value += item.value;
                self.total_weight += item.weight;
            }
        }
    }

    pub fn is_selected(&self, id: usize) -> bool {
        self.selected.get(id).copied().unwrap_or(false)
    }

    pub fn iter_selected_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, &selected)| selected)
            .map(|(id, _)| id)
    }

    pub fn selected_ids(&self) -> Vec<usize> {
        self.iter_selected_ids().collect()
    }

    pub fn selected(&self) -> &[bool] {
        &self.selected
    }

    pub fn flags(&self) -> Vec<u8> {
        self.selected.iter().map(|&s| s as u8).collect()
    }

    /// Number of items this solution covers, selected or not.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True if no item is selected.
    pub fn is_empty(&self) -> bool {
        !self.selected.iter().any(|&s| s)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter_selected_ids()
                .map(|id| format!("{}", id))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
