//! Ordered Cartesian product over per-position choice lists.

/// Iterator over every combination that picks one item per position.
///
/// Combinations are produced in odometer order: the last position varies
/// fastest and the first position slowest. With no positions the product
/// holds exactly one empty combination; with any empty position it is empty.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a, T> {
    choices: &'a [Vec<T>],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T> CartesianProduct<'a, T> {
    pub fn new(choices: &'a [Vec<T>]) -> Self {
        Self {
            choices,
            indices: vec![0; choices.len()],
            exhausted: choices.iter().any(Vec::is_empty),
        }
    }

    /// Total number of combinations, saturating at `u128::MAX`.
    pub fn count_combinations(choices: &[Vec<T>]) -> u128 {
        choices
            .iter()
            .fold(1u128, |total, position| {
                total.saturating_mul(position.len() as u128)
            })
    }

    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.choices[position].len() {
                return;
            }
            self.indices[position] = 0;
        }
        self.exhausted = true;
    }
}

impl<'a, T> Iterator for CartesianProduct<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let combination = self
            .indices
            .iter()
            .zip(self.choices)
            .map(|(&index, position)| &position[index])
            .collect();
        self.advance();
        Some(combination)
    }
}
