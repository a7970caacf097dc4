use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The open list ran dry before the goal was popped.
    #[error("frontier empty — no solution")]
    EmptyFrontier,
    #[error("unsupported puzzle size {0}: heuristic profiles are defined for 3x3 only")]
    UnsupportedPuzzleSize(usize),
    #[error("invalid heuristic profile {0}: expected 0 to 5")]
    InvalidProfile(usize),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("expansion limit of {0} reached before finding a solution")]
    ExpansionLimit(usize),
}
