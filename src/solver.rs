use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::Rng;

use crate::error::SolveError;
use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::heuristic::{Profile, ADMISSIBLE_PROFILE, PROFILE_COUNT, PROFILE_SIZE};
use crate::puzzle::{path_string, Direction, State};
use crate::shuffle::scrambled;

/// Expansions allowed before a search gives up.
pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

const PROGRESS_INTERVAL: usize = 10_000;

const EXPLORED_CAPACITY: usize = 65_536;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Index into [`crate::heuristic::PROFILES`].
    pub profile: usize,
    pub max_expansions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            profile: ADMISSIBLE_PROFILE,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States moved to the explored set.
    pub expanded: usize,
    /// Successors scored and pushed onto the frontier.
    pub generated: usize,
    pub max_frontier: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub path: Vec<Direction>,
    pub stats: SearchStats,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn path_string(&self) -> String {
        path_string(&self.path)
    }
}

/// Rejects sizes the heuristic profiles are not written for.
pub fn check_size(size: usize) -> Result<(), SolveError> {
    if size == PROFILE_SIZE {
        Ok(())
    } else {
        Err(SolveError::UnsupportedPuzzleSize(size))
    }
}

/// A* over blank moves. Each call to [`Solver::solve`] starts from an empty
/// frontier and explored set.
#[derive(Debug)]
pub struct Solver {
    config: SolverConfig,
    profile: &'static Profile,
    frontier: Frontier,
    explored: ExploredSet,
    stats: SearchStats,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        let profile = Profile::get(config.profile)?;
        Ok(Self {
            config,
            profile,
            frontier: Frontier::new(),
            explored: ExploredSet::new(),
            stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn explored(&self) -> &ExploredSet {
        &self.explored
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn solve(&mut self, initial: State) -> Result<Solution, SolveError> {
        check_size(initial.board().size())?;

        self.frontier = Frontier::new();
        self.explored = ExploredSet::with_capacity(EXPLORED_CAPACITY);
        self.stats = SearchStats::default();
        let started = Instant::now();

        if initial.is_goal() {
            info!("profile {}: start is already solved", self.config.profile);
            return Ok(self.finish(initial, started));
        }

        let mut start = initial;
        start.set_score(self.profile.evaluate(&start)?);
        self.frontier.insert(start);

        loop {
            let current = match self.frontier.pop_min() {
                Ok(state) => state,
                Err(err) => {
                    warn!(
                        "profile {}: frontier exhausted after {} expansions",
                        self.config.profile, self.stats.expanded
                    );
                    self.stats.elapsed = started.elapsed();
                    return Err(err);
                }
            };

            // Stale duplicate of a board expanded through a cheaper entry.
            if self.explored.contains(&current) {
                continue;
            }

            if current.is_goal() {
                return Ok(self.finish(current, started));
            }

            if self.stats.expanded >= self.config.max_expansions {
                warn!(
                    "profile {}: giving up after {} expansions, frontier holds {}",
                    self.config.profile,
                    self.stats.expanded,
                    self.frontier.len()
                );
                self.stats.elapsed = started.elapsed();
                return Err(SolveError::ExpansionLimit(self.config.max_expansions));
            }

            let fresh = self.explored.add(&current);
            debug_assert!(fresh, "board expanded twice");
            self.stats.expanded += 1;

            for mut next in current.successors() {
                if self.explored.contains(&next) {
                    continue;
                }
                next.set_score(self.profile.evaluate(&next)?);
                self.frontier.insert(next);
                self.stats.generated += 1;
            }
            self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());

            if self.stats.expanded % PROGRESS_INTERVAL == 0 {
                debug!(
                    "profile {}: {} expanded, frontier {}, best f {:?}",
                    self.config.profile,
                    self.stats.expanded,
                    self.frontier.len(),
                    self.frontier.peek_min().map(State::score)
                );
            }
        }
    }

    fn finish(&mut self, goal: State, started: Instant) -> Solution {
        self.stats.elapsed = started.elapsed();
        info!(
            "profile {}: solved in {} moves, {} expanded, {} generated, {:?}",
            self.config.profile,
            goal.cost(),
            self.stats.expanded,
            self.stats.generated,
            self.stats.elapsed
        );
        Solution {
            path: goal.path().to_vec(),
            stats: self.stats,
        }
    }
}

/// Outcome of running one heuristic profile in [`compare_profiles`].
#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub profile: usize,
    pub outcome: Result<Solution, SolveError>,
}

/// Solves the same start once per heuristic profile.
pub fn compare_profiles(initial: &State, max_expansions: usize) -> Vec<ProfileReport> {
    (0..PROFILE_COUNT)
        .map(|profile| {
            let config = SolverConfig {
                profile,
                max_expansions,
            };
            let outcome = Solver::new(config).and_then(|mut solver| solver.solve(initial.clone()));
            ProfileReport { profile, outcome }
        })
        .collect()
}

/// Scrambles a solved board and solves it, reporting either the move string
/// or the failure message.
pub fn solve_puzzle<R: Rng + ?Sized>(
    size: usize,
    profile: usize,
    shuffle_moves: usize,
    rng: &mut R,
) -> String {
    let outcome = check_size(size)
        .and_then(|_| {
            Solver::new(SolverConfig {
                profile,
                ..SolverConfig::default()
            })
        })
        .and_then(|mut solver| solver.solve(scrambled(size, shuffle_moves, rng)));

    match outcome {
        Ok(solution) => solution.path_string(),
        Err(err) => err.to_string(),
    }
}
