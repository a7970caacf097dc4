use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::puzzle::{Board, State};

/// Number of random blank moves used to scramble a fresh board.
pub const DEFAULT_SHUFFLE_MOVES: usize = 10_000;

/// Scrambles `board` with a random walk of `moves` legal blank moves.
///
/// Each step picks uniformly among the directions open to the blank, so the
/// result is always reachable from (and therefore solvable back to) the
/// starting board. The returned state keeps only the arrangement: empty
/// path, zero cost, zero score.
pub fn shuffle<R: Rng + ?Sized>(mut board: Board, moves: usize, rng: &mut R) -> State {
    for _ in 0..moves {
        let legal = board.legal_moves();
        let Some(&dir) = legal.choose(rng) else {
            break;
        };
        board.slide(dir);
    }

    debug!(
        "shuffled {}x{} board with {} moves, blank at {:?}",
        board.size(),
        board.size(),
        moves,
        board.blank_position()
    );
    State::new(board)
}

/// A solved board of `size` scrambled with `moves` random moves.
pub fn scrambled<R: Rng + ?Sized>(size: usize, moves: usize, rng: &mut R) -> State {
    shuffle(Board::solved(size), moves, rng)
}
