use serde::{Deserialize, Serialize};
use tracing::warn;

use super::constants::{
    MAX_BACKGROUND_LAYERS, MAX_CHAIN_COLORS, MIN_BACKGROUND_LAYERS, MIN_CHAIN_COLORS,
};
use super::types::DigitCap;
use crate::{Error, Result};

/// Tunables for [`GradientGenerator`](super::GradientGenerator).
///
/// Missing JSON fields fall back to the defaults:
///
/// ```rust
/// use trinkets::gradient::{DigitCap, GradientConfig};
///
/// let config = GradientConfig::from_json(r#"{ "max_layers": 4 }"#).unwrap();
/// assert_eq!(config.max_layers, 4);
/// assert_eq!(config.color_cap, DigitCap::MUTED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Digit cap for every color the gradient builders draw
    pub color_cap: DigitCap,
    /// Colors per linear gradient (inclusive)
    pub min_colors: usize,
    pub max_colors: usize,
    /// Layers per background (inclusive)
    pub min_layers: usize,
    pub max_layers: usize,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            color_cap: DigitCap::MUTED,
            min_colors: MIN_CHAIN_COLORS,
            max_colors: MAX_CHAIN_COLORS,
            min_layers: MIN_BACKGROUND_LAYERS,
            max_layers: MAX_BACKGROUND_LAYERS,
        }
    }
}

impl GradientConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both count ranges are non-empty and start at one or more
    pub fn validate(&self) -> Result<()> {
        check_range("colors", self.min_colors, self.max_colors)?;
        check_range("layers", self.min_layers, self.max_layers)
    }
}

fn check_range(what: &str, min: usize, max: usize) -> Result<()> {
    if min == 0 || min > max {
        warn!(what, min, max, "invalid gradient count range");
        return Err(Error::invalid_input(format!(
            "{what} range must satisfy 1 <= min <= max, got {min}..={max}"
        )));
    }
    Ok(())
}
