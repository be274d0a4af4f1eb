use std::time::Instant;

use mazepath::{
    generators::{GenerationOptions, generate_maze},
    logging,
    solvers::{Solver, solve_maze},
};

/// Largest maze side used for timing runs.
const SIZE: u16 = 255;

fn main() -> anyhow::Result<()> {
    let _guard = logging::init(None)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    for iter in 0..num_iters {
        let options = GenerationOptions {
            seed: Some(iter as u64),
            loop_percent: 20,
            ..Default::default()
        };
        let timer = Instant::now();
        let maze = generate_maze(SIZE, SIZE, &options)?;
        tracing::info!("[profile] iter {} generated in {:?}", iter, timer.elapsed());

        for solver in [Solver::Bfs, Solver::AStar] {
            let timer = Instant::now();
            let path = solve_maze(&maze, maze.origin(), solver)?;
            tracing::info!(
                "[profile] iter {} {}: {} steps in {:?}",
                iter,
                solver,
                path.len(),
                timer.elapsed()
            );
        }
    }
    Ok(())
}
