use anyhow::Result;
use clap::Parser;
use crossterm::style::{style, Stylize};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use taquin::solver::check_size;
use taquin::{
    compare_profiles, scrambled, Board, Solver, SolverConfig, ADMISSIBLE_PROFILE,
    DEFAULT_MAX_EXPANSIONS, DEFAULT_SHUFFLE_MOVES,
};

#[derive(Debug, Parser)]
#[command(name = "taquin", about = "Solve a scrambled sliding-tile puzzle with A*")]
struct Args {
    /// Width and height of the board
    #[arg(short = 'n', long, default_value_t = 3)]
    size: usize,

    /// Heuristic profile, 0 to 5 (5 is plain Manhattan distance)
    #[arg(short, long, default_value_t = ADMISSIBLE_PROFILE)]
    profile: usize,

    /// Random blank moves applied to the solved board
    #[arg(long, default_value_t = DEFAULT_SHUFFLE_MOVES)]
    shuffle_moves: usize,

    /// Seed for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many expansions
    #[arg(long, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    max_expansions: usize,

    /// Run every profile on the same scramble
    #[arg(long)]
    compare: bool,

    /// Print the board after each move of the solution
    #[arg(long)]
    show: bool,
}

fn render(board: &Board) -> String {
    let blank = board.blank_value();
    let size = board.size();
    let mut out = String::new();
    for (idx, &val) in board.tiles().iter().enumerate() {
        let cell = if val == blank {
            style(" . ").reverse().to_string()
        } else if val as usize == idx {
            style(format!("{:2} ", val)).green().to_string()
        } else {
            format!("{:2} ", val)
        };
        out.push_str(&cell);
        if idx % size == size - 1 {
            out.push('\n');
        }
    }
    out
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    check_size(args.size)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let start = scrambled(args.size, args.shuffle_moves, &mut rng);
    println!("Shuffled puzzle:\n{}", render(start.board()));

    if args.compare {
        for report in compare_profiles(&start, args.max_expansions) {
            match report.outcome {
                Ok(solution) => println!(
                    "profile {}: {} moves, {} expanded, {} generated, {:?}  {}",
                    report.profile,
                    solution.len(),
                    solution.stats.expanded,
                    solution.stats.generated,
                    solution.stats.elapsed,
                    solution.path_string()
                ),
                Err(err) => println!("profile {}: {}", report.profile, err),
            }
        }
        return Ok(());
    }

    let mut solver = Solver::new(SolverConfig {
        profile: args.profile,
        max_expansions: args.max_expansions,
    })?;
    info!("solving with profile {}", args.profile);
    let solution = solver.solve(start.clone())?;

    println!("Found solution with {} moves", solution.len());
    println!("{}", solution.path_string());

    if args.show {
        let mut state = start;
        for (step, &dir) in solution.path.iter().enumerate() {
            state = state.apply_move(dir);
            println!(
                "{} ({}/{})\n{}",
                dir,
                step + 1,
                solution.len(),
                render(state.board())
            );
        }
    }

    Ok(())
}
