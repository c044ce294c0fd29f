//! Generate command handler for carving new mazes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use labyrinth_lib::{generate_maze, GeneratorConfig, MazeSummary, Weight, WeightRange};
use labyrinth_cli::output::{print_grid, print_json, OutputFormat, OutputOptions};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Grid height in cells.
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Grid width in cells.
    #[arg(long, default_value_t = 15)]
    pub width: usize,

    /// Square grid size; overrides both height and width.
    #[arg(long, conflicts_with_all = ["height", "width"])]
    pub size: Option<usize>,

    /// Seed for reproducible mazes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest lattice edge weight.
    #[arg(long, default_value_t = 1)]
    pub min_weight: Weight,

    /// Largest lattice edge weight.
    #[arg(long, default_value_t = 10)]
    pub max_weight: Weight,

    /// Write the maze to this file instead of only printing it.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Resolve the requested `(height, width)`.
    pub fn dimensions(&self) -> (usize, usize) {
        match self.size {
            Some(size) => (size, size),
            None => (self.height, self.width),
        }
    }

    pub fn to_config(&self) -> Result<GeneratorConfig> {
        let weights = WeightRange::new(self.min_weight, self.max_weight)?;
        Ok(GeneratorConfig {
            weights,
            seed: self.seed,
        })
    }
}

/// Handle the generate subcommand.
pub fn handle_generate(args: &GenerateArgs, options: &OutputOptions) -> Result<()> {
    let (height, width) = args.dimensions();
    let config = args.to_config()?;
    let maze = generate_maze(height, width, &config)
        .with_context(|| format!("failed to generate a {height}x{width} maze"))?;

    if let Some(path) = &args.output {
        maze.grid
            .save(path)
            .with_context(|| format!("failed to write maze to {}", path.display()))?;
        info!(path = %path.display(), "maze saved");
    }

    match options.format {
        OutputFormat::Json => print_json(&MazeSummary::from_grid(&maze.grid))?,
        _ => print_grid(&maze.grid, options),
    }
    Ok(())
}
