//! A* solver for the 3×3 sliding-tile puzzle with six weighted
//! Manhattan-distance heuristic profiles.

pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristic;
pub mod puzzle;
pub mod shuffle;
pub mod solver;

pub use error::SolveError;
pub use heuristic::{Profile, ADMISSIBLE_PROFILE, PROFILES, PROFILE_COUNT};
pub use puzzle::{Board, Direction, State};
pub use shuffle::{scrambled, shuffle, DEFAULT_SHUFFLE_MOVES};
pub use solver::{
    compare_profiles, solve_puzzle, ProfileReport, SearchStats, Solution, Solver, SolverConfig,
    DEFAULT_MAX_EXPANSIONS,
};
