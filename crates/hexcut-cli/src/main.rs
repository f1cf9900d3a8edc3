//! hexcut - board, piece and laser template artwork
//!
//! Usage:
//!   hexcut board [OPTIONS]        Render one board variant
//!   hexcut pieces [OPTIONS]       Render one piece sheet variant
//!   hexcut batch <file.yaml>      Render every job of a batch file
//!   hexcut standard               Render the full published set
//!   hexcut example                Print an example batch file
//!
//! Files land in `--out` (default `pictures/`) as `<name>.svg` and
//! `<name>.png`. Logs go to stderr; set `RUST_LOG` or pass `-v`.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use hexcut::OutputTarget;

#[derive(Parser)]
#[command(name = "hexcut", version, about = "Board, piece and laser template artwork for Pijersi")]
struct Cli {
    /// Output directory
    #[arg(long, global = true, default_value = "pictures")]
    out: PathBuf,

    /// Skip the PNG previews
    #[arg(long, global = true)]
    no_png: bool,

    /// PNG pixels per device unit
    #[arg(long, global = true, default_value_t = 1.0)]
    png_scale: f64,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Board(cli::BoardArgs),
    Pieces(cli::PiecesArgs),
    Batch {
        /// YAML batch file
        file: PathBuf,
    },
    Standard(cli::StandardArgs),
    Example,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut target = OutputTarget::new(&cli.out).with_raster_scale(cli.png_scale);
    if cli.no_png {
        target = target.vector_only();
    }

    let result = match &cli.command {
        Command::Board(args) => cli::cmd_board(args, &target),
        Command::Pieces(args) => cli::cmd_pieces(args, &target),
        Command::Batch { file } => cli::cmd_batch(file, &target),
        Command::Standard(args) => cli::cmd_standard(args, &target),
        Command::Example => {
            cli::print_example();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
