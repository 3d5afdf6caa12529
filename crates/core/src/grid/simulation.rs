//! Contract between a fire simulation and the loops that drive it

use super::GridGeometry;
use crate::render::Renderer;
use crate::spread::SpreadWith;

/// What a driving loop needs from a simulation: its size, whether it is
/// done, a way to step it, and a way to draw it.
pub trait FireSimulation: GridGeometry {
    fn is_completed(&self) -> bool;

    /// Steps run so far
    fn step_count(&self) -> usize;

    /// Run one step; `false` if nothing happened because the simulation is
    /// already completed
    fn spread(&mut self, with: SpreadWith<'_>) -> bool;

    fn render(&self, renderer: &mut dyn Renderer);
}
