//! Layout configuration.
//!
//! Options deserialize from the same object shape diagram builders pass around
//! (`{"rankdir": "LR", "nodesep": 40, ...}`); every key is optional and unknown keys are ignored.

use crate::error::{LayoutError, Result};
use crate::order::OrderStrategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    /// Ranks progress downwards; nodes in a rank are spread horizontally.
    #[default]
    TB,
    /// Ranks progress to the right; nodes in a rank are spread vertically.
    LR,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub rankdir: RankDir,
    /// Gap between neighbouring nodes of the same rank.
    pub nodesep: f64,
    /// Distance between the leading edges of consecutive ranks.
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
    pub ordering: OrderStrategy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 40.0,
            ranksep: 50.0,
            marginx: 20.0,
            marginy: 20.0,
            ordering: OrderStrategy::Lexical,
        }
    }
}

impl LayoutOptions {
    /// Parses and validates options from a JSON object.
    pub fn from_json(s: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("nodesep", self.nodesep),
            ("ranksep", self.ranksep),
            ("marginx", self.marginx),
            ("marginy", self.marginy),
        ] {
            if !value.is_finite() || value < 0.0 {
                tracing::debug!(option = name, value, "rejecting layout option");
                return Err(LayoutError::InvalidOption { name, value });
            }
        }
        Ok(())
    }

    /// Margin before the first rank.
    pub(crate) fn main_margin(&self) -> f64 {
        match self.rankdir {
            RankDir::TB => self.marginy,
            RankDir::LR => self.marginx,
        }
    }

    /// Margin before the first node of each rank.
    pub(crate) fn cross_margin(&self) -> f64 {
        match self.rankdir {
            RankDir::TB => self.marginx,
            RankDir::LR => self.marginy,
        }
    }
}
