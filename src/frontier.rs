use std::collections::VecDeque;

use crate::error::SolveError;
use crate::puzzle::State;

/// Open list kept in ascending order of evaluation score.
///
/// States with equal scores pop in insertion order.
#[derive(Debug, Default)]
pub struct Frontier {
    states: VecDeque<State>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `state` after every entry whose score is not greater.
    pub fn insert(&mut self, state: State) {
        let score = state.score();
        let slot = self.states.partition_point(|entry| entry.score() <= score);
        self.states.insert(slot, state);
    }

    pub fn pop_min(&mut self) -> Result<State, SolveError> {
        self.states.pop_front().ok_or(SolveError::EmptyFrontier)
    }

    pub fn peek_min(&self) -> Option<&State> {
        self.states.front()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    pub fn is_ordered(&self) -> bool {
        self.states
            .iter()
            .zip(self.states.iter().skip(1))
            .all(|(a, b)| a.score() <= b.score())
    }
}
