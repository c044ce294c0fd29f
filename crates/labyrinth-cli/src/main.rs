mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use labyrinth_cli::logging::{init_logging, LoggingConfig};
use labyrinth_cli::output::{OutputFormat, OutputOptions};

use commands::generate::{handle_generate, GenerateArgs};
use commands::show::{handle_show, ShowArgs};
use commands::solve::{handle_solve, SolveArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate, store, and solve mazes")]
struct Cli {
    /// Output format for printed mazes.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Blocks)]
    format: OutputFormat,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Carve a new random maze.
    Generate(GenerateArgs),
    /// Find the escape path of a stored maze and mark it.
    Solve(SolveArgs),
    /// Print a stored maze.
    Show(ShowArgs),
}

fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env());
    let cli = Cli::parse();
    let options = OutputOptions::new(cli.format, cli.no_color);

    match &cli.command {
        Command::Generate(args) => handle_generate(args, &options),
        Command::Solve(args) => handle_solve(args, &options),
        Command::Show(args) => handle_show(args, &options),
    }
}
