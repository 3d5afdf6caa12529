//! Interactive Fire Simulation Demo
//!
//! Shows the grid one step at a time in the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive -- [--enhanced] [--width 21] [--height 21]
//! ```
//!
//! Press Enter to advance a step, `q` (or Ctrl-C / Ctrl-D) to quit.

mod runner;

use clap::Parser;
use fire_grid_core::{FireGrid, Neighbourhood, SimulationConfig, SpreadRule};
use runner::{Command, Runner, StepInput};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Step through a fire spreading across a forest
#[derive(Parser, Debug)]
#[command(name = "demo-interactive")]
#[command(about = "Interactive step-by-step fire spread", long_about = None)]
struct Args {
    /// Use the northerly wind spread rule
    #[arg(short, long)]
    enhanced: bool,

    /// Grid width in cells (at least 3)
    #[arg(long, default_value_t = 21)]
    width: usize,

    /// Grid height in cells (at least 3)
    #[arg(long, default_value_t = 21)]
    height: usize,

    /// Only sample north, east, south and west neighbours
    #[arg(long)]
    cardinal_only: bool,
}

/// Reads one line per step from the terminal
struct EditorInput {
    editor: DefaultEditor,
}

impl StepInput for EditorInput {
    fn next_command(&mut self) -> Command {
        match self.editor.readline("") {
            Ok(line) => match line.trim() {
                "q" | "quit" | "exit" => Command::Quit,
                _ => Command::Continue,
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Command::Quit,
            Err(err) => {
                warn!("Failed to read input: {}", err);
                Command::Quit
            }
        }
    }
}

fn main() -> ExitCode {
    // Keep logs quiet by default so they don't break up the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let rule = if args.enhanced {
        SpreadRule::NortherlyWind
    } else {
        SpreadRule::Standard
    };
    let config = SimulationConfig {
        width: args.width,
        height: args.height,
        neighbourhood: if args.cardinal_only {
            Neighbourhood::VonNeumann
        } else {
            Neighbourhood::Moore
        },
        ..SimulationConfig::default()
    };

    let mut grid = match FireGrid::from_config(&config) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut input = match DefaultEditor::new() {
        Ok(editor) => EditorInput { editor },
        Err(e) => {
            eprintln!("Failed to create readline: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Applied as a per-step override
    let strategy = rule.strategy();
    let mut runner = Runner::new(io::stdout().lock(), rule.title(), Some(strategy.as_ref()));

    match runner.run(&mut grid, &mut input) {
        Ok(steps) => {
            info!("Finished after {} steps", steps);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
