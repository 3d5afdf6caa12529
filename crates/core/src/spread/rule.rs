//! Serialisable spread rule selector

use super::{SpreadStrategy, StandardSpreadStrategy, WindSpreadStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named spread rules that configuration files and command lines can pick
/// between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpreadRule {
    /// [`StandardSpreadStrategy`]
    #[default]
    Standard,
    /// [`WindSpreadStrategy::northerly`]
    NortherlyWind,
}

impl SpreadRule {
    pub const ALL: [SpreadRule; 2] = [SpreadRule::Standard, SpreadRule::NortherlyWind];

    /// Build the strategy this rule names
    #[must_use]
    pub fn strategy(self) -> Box<dyn SpreadStrategy> {
        match self {
            Self::Standard => Box::new(StandardSpreadStrategy),
            Self::NortherlyWind => Box::new(WindSpreadStrategy::northerly()),
        }
    }

    /// Display name of the simulation run with this rule
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Standard => "Standard Fire Simulation",
            Self::NortherlyWind => "Northerly Wind Fire Simulation",
        }
    }
}

impl fmt::Display for SpreadRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}
