use ahash::AHashSet;

use crate::puzzle::{Board, State};

/// Closed list. Membership depends on the board alone; path, cost and
/// score are ignored.
#[derive(Debug, Default)]
pub struct ExploredSet {
    boards: AHashSet<Board>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boards: AHashSet::with_capacity(capacity),
        }
    }

    pub fn contains(&self, state: &State) -> bool {
        self.boards.contains(state.board())
    }

    /// Records `state` as expanded. Returns false if its board was
    /// already present.
    pub fn add(&mut self, state: &State) -> bool {
        self.boards.insert(state.board().clone())
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Direction;

    #[test]
    fn membership_ignores_path_and_cost() {
        let mut explored = ExploredSet::new();
        let start = State::solved(3);
        assert!(!explored.contains(&start));
        assert!(explored.add(&start));

        // Same board reached after two moves.
        let round_trip = start
            .apply_move(Direction::North)
            .apply_move(Direction::South);
        assert_eq!(round_trip.cost(), 2);
        assert!(explored.contains(&round_trip));
        assert!(!explored.add(&round_trip));
        assert_eq!(explored.len(), 1);
    }

    #[test]
    fn distinct_boards_are_distinct_entries() {
        let mut explored = ExploredSet::new();
        let start = State::solved(3);
        for next in start.successors() {
            assert!(explored.add(&next));
        }
        assert_eq!(explored.len(), 2);
        assert!(!explored.contains(&start));
    }

    #[test]
    fn presized_set_starts_empty() {
        let mut explored = ExploredSet::with_capacity(1024);
        assert!(explored.is_empty());
        assert!(explored.add(&State::solved(3)));
        assert!(explored.contains(&State::solved(3)));
    }
}
