//! Step-by-step console loop
//!
//! Kept apart from the terminal so it can be driven by scripted input in
//! tests.

use fire_grid_core::{FireSimulation, Glyphs, SpreadStrategy, SpreadWith, StringRenderer};
use std::io::{self, Write};

/// What the user asked for after seeing a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// Source of user commands
pub trait StepInput {
    fn next_command(&mut self) -> Command;
}

/// Prints each step of a simulation and waits for the user between steps
pub struct Runner<'a, W: Write> {
    out: W,
    title: &'a str,
    glyphs: Glyphs,
    rule: Option<&'a dyn SpreadStrategy>,
}

impl<'a, W: Write> Runner<'a, W> {
    /// # Arguments
    ///
    /// * `out` - Where the board is printed
    /// * `title` - Heading printed once at the start
    /// * `rule` - Spread rule applied on every step instead of the simulation's own
    pub fn new(out: W, title: &'a str, rule: Option<&'a dyn SpreadStrategy>) -> Self {
        Self {
            out,
            title,
            glyphs: Glyphs::default(),
            rule,
        }
    }

    /// Run until the simulation completes or the user quits
    ///
    /// # Returns
    ///
    /// Number of steps shown, counting the initial board as step 1
    ///
    /// # Errors
    ///
    /// Any error writing to the output.
    pub fn run(
        &mut self,
        simulation: &mut dyn FireSimulation,
        input: &mut dyn StepInput,
    ) -> io::Result<usize> {
        self.print_header()?;

        let mut step = 1;
        loop {
            writeln!(self.out, "Step {step}:")?;
            writeln!(self.out)?;

            let mut renderer = StringRenderer::with_glyphs(self.glyphs.clone());
            simulation.render(&mut renderer);
            writeln!(self.out, "{renderer}")?;
            writeln!(self.out)?;

            if simulation.is_completed() {
                break;
            }

            writeln!(self.out, "hit Enter to continue, or \"q\" to quit...")?;
            self.out.flush()?;

            match input.next_command() {
                Command::Quit => {
                    writeln!(self.out, "user has quit...")?;
                    break;
                }
                Command::Continue => {
                    step += 1;
                    simulation.spread(SpreadWith::from(self.rule));
                }
            }
        }

        writeln!(self.out)?;
        writeln!(self.out, "completed {step} steps")?;
        self.out.flush()?;
        Ok(step)
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.title)?;
        writeln!(self.out, "{}", "-".repeat(self.title.len()))?;
        writeln!(self.out)?;
        writeln!(self.out, "Key:")?;
        writeln!(self.out, "\tEmpty = \"{}\"", self.glyphs.empty)?;
        writeln!(self.out, "\tTree = \"{}\"", self.glyphs.tree)?;
        writeln!(self.out, "\tBurning = \"{}\"", self.glyphs.burning)?;
        writeln!(self.out)?;
        writeln!(self.out, "Press Enter to proceed, or \"q\" to quit")?;
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fire_grid_core::{FireGrid, WindSpreadStrategy};
    use std::collections::VecDeque;

    /// Replays commands, then quits
    struct Scripted(VecDeque<Command>);

    impl Scripted {
        fn new(commands: &[Command]) -> Self {
            Self(commands.iter().copied().collect())
        }

        fn always_continue() -> Self {
            Self::new(&[Command::Continue; 64])
        }
    }

    impl StepInput for Scripted {
        fn next_command(&mut self) -> Command {
            self.0.pop_front().unwrap_or(Command::Quit)
        }
    }

    fn run(grid: &mut FireGrid, input: &mut Scripted, rule: Option<&dyn SpreadStrategy>) -> (usize, String) {
        let mut out = Vec::new();
        let steps = Runner::new(&mut out, "Test Fire Simulation", rule)
            .run(grid, input)
            .unwrap();
        (steps, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_runs_until_completed() {
        let mut grid = FireGrid::new(5, 5).unwrap();
        let (steps, output) = run(&mut grid, &mut Scripted::always_continue(), None);

        assert_eq!(steps, 4);
        assert!(grid.is_completed());
        assert!(output.starts_with("Test Fire Simulation\n--------------------\n"));
        assert!(output.contains("\tTree = \"!\""));
        assert!(output.contains("Step 1:\n\nO O O O O\nO ! ! ! O\nO ! ^ ! O\n"));
        assert!(output.contains("Step 4:"));
        assert!(!output.contains("Step 5:"));
        assert!(!output.contains("user has quit"));
        assert!(output.ends_with("completed 4 steps\n"));
    }

    #[test]
    fn test_quit_stops_early() {
        let mut grid = FireGrid::new(7, 7).unwrap();
        let mut input = Scripted::new(&[Command::Continue, Command::Quit]);
        let (steps, output) = run(&mut grid, &mut input, None);

        assert_eq!(steps, 2);
        assert_eq!(grid.step_count(), 1);
        assert!(!grid.is_completed());
        assert!(output.contains("user has quit..."));
        assert!(output.ends_with("completed 2 steps\n"));
    }

    #[test]
    fn test_rule_override_is_used_every_step() {
        let wind = WindSpreadStrategy::northerly();
        let mut grid = FireGrid::new(7, 7).unwrap();
        let (steps, _) = run(&mut grid, &mut Scripted::always_continue(), Some(&wind));

        // Ignition row 3 burns north through rows 2 and 1, then burns out
        assert_eq!(steps, 4);
        assert_eq!(grid.count_in_state(fire_grid_core::CellState::Tree), 25 - 3);
    }
}
