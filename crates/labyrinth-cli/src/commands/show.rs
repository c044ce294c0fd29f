//! Show command handler for printing a stored maze.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use labyrinth_lib::{Grid, MazeSummary};
use labyrinth_cli::output::{print_grid, print_json, OutputFormat, OutputOptions};

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Maze file in the text grid format.
    #[arg(long, short = 'i')]
    pub input: PathBuf,
}

/// Handle the show subcommand.
pub fn handle_show(args: &ShowArgs, options: &OutputOptions) -> Result<()> {
    let grid = Grid::load(&args.input)
        .with_context(|| format!("failed to load maze from {}", args.input.display()))?;

    match options.format {
        OutputFormat::Json => print_json(&MazeSummary::from_grid(&grid))?,
        _ => print_grid(&grid, options),
    }
    Ok(())
}
