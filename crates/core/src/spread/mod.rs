//! Spread rules
//!
//! A [`SpreadStrategy`] turns a cell plus its sampled neighbours into the
//! cell's next state. The grid picks one per step, either its own default or
//! a one-off override passed as [`SpreadWith::Strategy`].

mod rule;
mod standard;
mod strategy;
mod wind;

pub use rule::SpreadRule;
pub use standard::StandardSpreadStrategy;
pub use strategy::{SpreadStrategy, SpreadWith};
pub use wind::WindSpreadStrategy;
