//! # Gradient Module
//!
//! Random multi-layer CSS gradient backgrounds, tuned to sit behind white text.
//!
//! A background is two or three layers joined by `", "`. Each layer is either
//!
//! * `linear-gradient(<angle>, <color>, <color>[, <color>])`, or
//! * `radial-gradient(ellipse at <position>, <color>, transparent)`.
//!
//! Colors are `#rrggbb` codes whose digits are capped (14 by default) to keep
//! away from the lightest shades.
//!
//! ## Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use trinkets::gradient::{generate_gradient_background, GradientGenerator, RngSource};
//!
//! // Fresh randomness each call
//! let css = generate_gradient_background();
//! assert!(css.ends_with(')'));
//!
//! // Reproducible output from a seeded RNG
//! let mut a = GradientGenerator::new(RngSource::new(StdRng::seed_from_u64(7)));
//! let mut b = GradientGenerator::new(RngSource::new(StdRng::seed_from_u64(7)));
//! assert_eq!(a.random_gradient_background(), b.random_gradient_background());
//! ```

mod config;
mod constants;
mod source;
mod types;

pub use config::GradientConfig;
pub use constants::*;
pub use source::{RandomSource, RngSource, ThreadRandom};
pub use types::{
    Angle, DigitCap, GradientBackground, GradientLayer, HexColor, HorizontalEdge, Position,
    VerticalEdge,
};

#[cfg(test)]
pub(crate) use source::MockRandomSource;

use tracing::{instrument, trace};

use crate::{Error, Result};

/// Builds random gradient pieces from a [`RandomSource`].
///
/// Every method draws fresh values; the generator keeps no state besides its
/// source and configuration.
#[derive(Debug, Clone)]
pub struct GradientGenerator<S = ThreadRandom> {
    source: S,
    config: GradientConfig,
}

impl GradientGenerator<ThreadRandom> {
    /// Generator backed by the thread-local RNG
    pub fn thread_local() -> Self {
        Self::new(ThreadRandom)
    }
}

impl Default for GradientGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::thread_local()
    }
}

impl<S: RandomSource> GradientGenerator<S> {
    /// Creates a generator with the default configuration
    pub fn new(source: S) -> Self {
        Self { source, config: GradientConfig::default() }
    }

    /// Creates a generator with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the configuration does not validate.
    pub fn with_config(source: S, config: GradientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn below(&mut self, len: usize) -> usize {
        let index = (self.source.next_unit() * len as f64) as usize;
        index.min(len - 1)
    }

    /// Uniform count in `min..=max`
    fn between(&mut self, min: usize, max: usize) -> usize {
        min + self.below(max - min + 1)
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySequence`] when `items` is empty.
    pub fn random_choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::EmptySequence);
        }
        let index = self.below(items.len());
        Ok(&items[index])
    }

    /// Six digits, each uniform in `[0, cap)`
    pub fn random_hex(&mut self, cap: DigitCap) -> HexColor {
        let mut digits = [0u8; HEX_COLOR_DIGITS];
        for digit in &mut digits {
            *digit = self.below(usize::from(cap.get())) as u8;
        }
        HexColor::from_digits(digits)
    }

    pub fn random_position(&mut self) -> Position {
        let vertical = VerticalEdge::ALL[self.below(VerticalEdge::ALL.len())];
        let horizontal = HorizontalEdge::ALL[self.below(HorizontalEdge::ALL.len())];
        Position { vertical, horizontal }
    }

    /// Whole degrees in `[0, 360)`
    pub fn random_angle(&mut self) -> Angle {
        let degrees = self.below(usize::from(FULL_TURN_DEGREES));
        Angle::from_degrees(degrees as u16)
    }

    /// Between `min_colors` and `max_colors` colors, each under `cap`
    pub fn random_color_chain(&mut self, cap: DigitCap) -> Vec<HexColor> {
        let count = self.between(self.config.min_colors, self.config.max_colors);
        (0..count).map(|_| self.random_hex(cap)).collect()
    }

    pub fn random_linear_gradient(&mut self) -> GradientLayer {
        let angle = self.random_angle();
        let colors = self.random_color_chain(self.config.color_cap);
        GradientLayer::Linear { angle, colors }
    }

    pub fn random_radial_gradient(&mut self) -> GradientLayer {
        let position = self.random_position();
        let color = self.random_hex(self.config.color_cap);
        GradientLayer::Radial { position, color }
    }

    /// Linear or radial with equal odds
    pub fn random_layer(&mut self) -> GradientLayer {
        if self.below(2) == 0 {
            self.random_linear_gradient()
        } else {
            self.random_radial_gradient()
        }
    }

    /// Between `min_layers` and `max_layers` independent layers
    pub fn random_gradient_background(&mut self) -> GradientBackground {
        let count = self.between(self.config.min_layers, self.config.max_layers);
        let layers: Vec<_> = (0..count).map(|_| self.random_layer()).collect();
        trace!(
            layers = layers.len(),
            linear = layers.iter().filter(|layer| layer.is_linear()).count(),
            "generated gradient background"
        );
        GradientBackground::new(layers)
    }
}

/// Random gradient background as a CSS string, ready for `style.background`.
///
/// # Examples
///
/// ```rust
/// use trinkets::gradient::generate_gradient_background;
///
/// let css = generate_gradient_background();
/// assert!(css.starts_with("linear-gradient(") || css.starts_with("radial-gradient("));
/// ```
#[instrument(level = "trace")]
pub fn generate_gradient_background() -> String {
    GradientGenerator::thread_local().random_gradient_background().to_string()
}
