//! Headless fire spread runner
//!
//! Runs a grid to completion without any input, printing every frame (or
//! only the last one) followed by a summary.

use clap::{Parser, ValueEnum};
use fire_grid_core::{
    CellState, FireGrid, GridError, GridGeometry, GridLocation, Neighbourhood, SimulationConfig, SpreadRule,
    SpreadWith, StringRenderer,
};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Fire spread demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "demo-headless")]
#[command(about = "Run a fire spread simulation to completion", long_about = None)]
struct Args {
    /// Grid width in cells (at least 3)
    #[arg(long, default_value_t = 21)]
    width: usize,

    /// Grid height in cells (at least 3)
    #[arg(long, default_value_t = 21)]
    height: usize,

    /// Row of the ignition cell (defaults to the centre)
    #[arg(long, requires = "ignition_column")]
    ignition_row: Option<usize>,

    /// Column of the ignition cell (defaults to the centre)
    #[arg(long, requires = "ignition_row")]
    ignition_column: Option<usize>,

    /// Spread rule
    #[arg(short, long, value_enum, default_value_t = RuleArg::Standard)]
    rule: RuleArg,

    /// Only sample north, east, south and west neighbours
    #[arg(long)]
    cardinal_only: bool,

    /// Load the simulation settings from a JSON file instead of the flags above
    #[arg(short, long, conflicts_with_all = ["width", "height", "ignition_row", "rule", "cardinal_only"])]
    config: Option<PathBuf>,

    /// Stop after this many steps even if fire is still burning
    #[arg(short, long)]
    max_steps: Option<usize>,

    /// Only print the final frame
    #[arg(short, long)]
    quiet: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    Standard,
    NortherlyWind,
}

impl From<RuleArg> for SpreadRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Standard => SpreadRule::Standard,
            RuleArg::NortherlyWind => SpreadRule::NortherlyWind,
        }
    }
}

impl Args {
    fn simulation_config(&self) -> Result<SimulationConfig, DemoError> {
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&text)?);
        }

        Ok(SimulationConfig {
            width: self.width,
            height: self.height,
            ignition: self
                .ignition_row
                .zip(self.ignition_column)
                .map(GridLocation::from),
            neighbourhood: if self.cardinal_only {
                Neighbourhood::VonNeumann
            } else {
                Neighbourhood::Moore
            },
            spread_rule: self.rule.into(),
        })
    }
}

/// Errors that stop a run
#[derive(Debug)]
enum DemoError {
    Grid(GridError),
    Config(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Config(e) => write!(f, "invalid config file: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Summary {
    width: usize,
    height: usize,
    rule: SpreadRule,
    steps: usize,
    completed: bool,
    trees_remaining: usize,
    burning: usize,
    burnt: usize,
}

impl Summary {
    fn from_grid(grid: &FireGrid, rule: SpreadRule) -> Self {
        let boundary = grid.cells().iter().filter(|c| c.is_boundary()).count();
        Self {
            width: grid.width(),
            height: grid.height(),
            rule,
            steps: grid.step_count(),
            completed: grid.is_completed(),
            trees_remaining: grid.count_in_state(CellState::Tree),
            burning: grid.burning_count(),
            burnt: grid.count_in_state(CellState::Empty) - boundary,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Grid:            {}x{}", self.width, self.height)?;
        writeln!(f, "Rule:            {}", self.rule)?;
        writeln!(f, "Steps:           {}", self.steps)?;
        writeln!(f, "Completed:       {}", self.completed)?;
        writeln!(f, "Trees remaining: {}", self.trees_remaining)?;
        writeln!(f, "Still burning:   {}", self.burning)?;
        write!(f, "Burnt:           {}", self.burnt)
    }
}

fn print_frame(grid: &FireGrid, out: &mut impl Write) -> io::Result<()> {
    let mut renderer = StringRenderer::new();
    grid.render(&mut renderer);
    writeln!(out, "Step {}:", grid.step_count() + 1)?;
    writeln!(out, "{renderer}")?;
    writeln!(out)
}

/// Step `grid` until it completes or `max_steps` is reached
fn simulate(
    grid: &mut FireGrid,
    max_steps: Option<usize>,
    quiet: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    loop {
        let done = grid.is_completed() || max_steps.is_some_and(|max| grid.step_count() >= max);
        if !quiet || done {
            print_frame(grid, out)?;
        }
        if done {
            return Ok(());
        }

        grid.spread(SpreadWith::Default);
        debug!("Step {} done, {} burning", grid.step_count(), grid.burning_count());
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<Summary, DemoError> {
    let config = args.simulation_config()?;
    info!(
        "Running {}x{} grid with rule {}",
        config.width, config.height, config.spread_rule
    );

    let mut grid = FireGrid::from_config(&config)?;
    simulate(&mut grid, args.max_steps, args.quiet, out)?;

    let summary = Summary::from_grid(&grid, config.spread_rule);
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{summary}")?;
    }
    Ok(summary)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();

    match run(&args, &mut stdout) {
        Ok(summary) => {
            info!("Finished after {} steps", summary.steps);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
