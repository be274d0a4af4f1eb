//! CLI for maze generation and solving

use anyhow::Context;
use clap::Parser;
use mazepath::{
    MazeError,
    config::Args,
    generators::generate_maze,
    logging, render,
    solvers::{route, solve_maze},
    storage,
};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = logging::init(args.log_dir.as_deref())?;
    args.validate()?;
    tracing::debug!("[main] cell density {} (display only)", args.cell_density);

    let maze = match &args.load {
        Some(path) => storage::load(path, args.goal())
            .with_context(|| format!("Failed to load maze from {}", path.display()))?,
        None => generate_maze(args.rows, args.cols, &args.generation_options())?,
    };

    if let Some(save) = &args.save {
        let path = save.clone().unwrap_or_else(storage::timestamped_file_name);
        storage::save(&maze, &path)
            .with_context(|| format!("Failed to save maze to {}", path.display()))?;
        println!("Maze saved to {}", path.display());
    }

    let start = args.start(&maze);
    let path = match solve_maze(&maze, start, args.solver) {
        Ok(path) => path,
        Err(MazeError::Unreachable { start, goal }) => {
            if args.show {
                print!("{}", render::draw(&maze, &[], !args.no_color));
            }
            println!("No path found from {} to {}.", start, goal);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if args.show {
        let cells = route(&path, start, maze.goal())?;
        print!("{}", render::draw(&maze, &cells, !args.no_color));
    }
    println!(
        "{}: the shortest path from {} to {} is {} steps.",
        args.solver,
        start,
        maze.goal(),
        path.len()
    );
    Ok(())
}
