//! Weighted Manhattan-distance evaluators.
//!
//! Each profile weights the per-tile distance of tiles `0..9` and divides the
//! total by a fixed divisor. Only [`ADMISSIBLE_PROFILE`] is the plain
//! Manhattan distance; the others may overestimate, so A* driven by them
//! returns a path but not necessarily a shortest one.

use crate::error::SolveError;
use crate::puzzle::{Board, State};

/// Board size the weight vectors are written for.
pub const PROFILE_SIZE: usize = 3;

pub const PROFILE_COUNT: usize = 6;

/// Unit weights, divisor 1.
pub const ADMISSIBLE_PROFILE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub weights: [u32; PROFILE_SIZE * PROFILE_SIZE],
    pub divisor: u32,
}

pub const PROFILES: [Profile; PROFILE_COUNT] = [
    Profile {
        weights: [36, 12, 12, 4, 1, 1, 4, 1, 0],
        divisor: 4,
    },
    Profile {
        weights: [8, 7, 6, 5, 4, 3, 2, 1, 0],
        divisor: 1,
    },
    Profile {
        weights: [8, 7, 6, 5, 4, 3, 2, 1, 0],
        divisor: 4,
    },
    Profile {
        weights: [8, 7, 6, 5, 3, 2, 4, 1, 0],
        divisor: 1,
    },
    Profile {
        weights: [8, 7, 6, 5, 3, 2, 4, 1, 0],
        divisor: 4,
    },
    Profile {
        weights: [1, 1, 1, 1, 1, 1, 1, 1, 0],
        divisor: 1,
    },
];

impl Profile {
    pub fn get(index: usize) -> Result<&'static Profile, SolveError> {
        PROFILES.get(index).ok_or(SolveError::InvalidProfile(index))
    }

    /// Weighted distance estimate for `board`.
    pub fn heuristic(&self, board: &Board) -> Result<f64, SolveError> {
        let size = board.size();
        if size != PROFILE_SIZE {
            return Err(SolveError::UnsupportedPuzzleSize(size));
        }

        let mut total = 0u32;
        for (value, &weight) in self.weights.iter().enumerate() {
            total += weight * tile_distance(board, value as u32);
        }
        Ok(f64::from(total) / f64::from(self.divisor))
    }

    /// `f = cost + heuristic`.
    pub fn evaluate(&self, state: &State) -> Result<f64, SolveError> {
        Ok(state.cost() as f64 + self.heuristic(state.board())?)
    }
}

/// Manhattan distance between where `value` sits and where it belongs.
///
/// # Panics
///
/// Panics if `value` is not on the board.
pub fn tile_distance(board: &Board, value: u32) -> u32 {
    let size = board.size();
    let (row, col) = board
        .locate(value)
        .expect("board is a permutation of 0..n²");
    let goal_row = value as usize / size;
    let goal_col = value as usize % size;
    (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
}

pub fn heuristic(state: &State, profile: usize) -> Result<f64, SolveError> {
    Profile::get(profile)?.heuristic(state.board())
}

pub fn evaluate(state: &State, profile: usize) -> Result<f64, SolveError> {
    Profile::get(profile)?.evaluate(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::parse_path;
    use crate::shuffle::shuffle;
    use rand::{rngs::StdRng, SeedableRng};

    fn after(symbols: &str) -> State {
        let mut state = State::solved(3);
        for dir in parse_path(symbols).unwrap() {
            state = state.apply_move(dir);
        }
        state
    }

    #[test]
    fn solved_board_scores_zero_everywhere() {
        let state = State::solved(3);
        for profile in 0..PROFILE_COUNT {
            assert_eq!(heuristic(&state, profile).unwrap(), 0.0);
        }
    }

    #[test]
    fn unit_profile_is_zero_only_at_goal() {
        let mut rng = StdRng::seed_from_u64(7);
        for moves in 0..40 {
            let state = shuffle(Board::solved(3), moves, &mut rng);
            let h = heuristic(&state, ADMISSIBLE_PROFILE).unwrap();
            assert_eq!(h == 0.0, state.is_goal(), "board:\n{}", state.board());
        }
    }

    #[test]
    fn weighted_profiles_can_overestimate() {
        // Tiles 5, 2, 1 and 0 are each one cell away; four moves undo them.
        let state = after("NNWW");
        assert_eq!(state.cost(), 4);

        assert_eq!(heuristic(&state, ADMISSIBLE_PROFILE).unwrap(), 4.0);
        assert_eq!(heuristic(&state, 0).unwrap(), 61.0 / 4.0);
        assert_eq!(heuristic(&state, 1).unwrap(), 24.0);
        assert_eq!(heuristic(&state, 2).unwrap(), 6.0);
        assert_eq!(heuristic(&state, 3).unwrap(), 23.0);
        assert_eq!(heuristic(&state, 4).unwrap(), 23.0 / 4.0);
    }

    #[test]
    fn blank_carries_no_weight() {
        let state = after("N");
        // Only tile 5 is displaced.
        assert_eq!(tile_distance(state.board(), 5), 1);
        assert_eq!(tile_distance(state.board(), 8), 1);
        assert_eq!(heuristic(&state, ADMISSIBLE_PROFILE).unwrap(), 1.0);
        assert_eq!(heuristic(&state, 0).unwrap(), 0.25);
    }

    #[test]
    #[should_panic(expected = "board is a permutation")]
    fn distance_of_missing_tile_panics() {
        tile_distance(&Board::solved(3), 9);
    }

    #[test]
    fn evaluate_adds_cost() {
        let state = after("NW");
        assert_eq!(state.cost(), 2);
        assert_eq!(evaluate(&state, ADMISSIBLE_PROFILE).unwrap(), 4.0);
        assert_eq!(evaluate(&state, 1).unwrap(), 2.0 + 4.0 + 3.0);
    }

    #[test]
    fn rejects_other_sizes_and_profiles() {
        let state = State::solved(4);
        assert_eq!(
            heuristic(&state, 5),
            Err(SolveError::UnsupportedPuzzleSize(4))
        );
        assert_eq!(
            heuristic(&State::solved(3), 6),
            Err(SolveError::InvalidProfile(6))
        );
    }

    #[test]
    fn profile_table_shape() {
        for profile in PROFILES.iter() {
            assert_eq!(profile.weights[8], 0);
            assert!(profile.divisor == 1 || profile.divisor == 4);
        }
        assert_eq!(PROFILES[1].weights, PROFILES[2].weights);
        assert_eq!(PROFILES[3].weights, PROFILES[4].weights);
    }
}
