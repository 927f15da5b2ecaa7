//! # Size Module
//!
//! Human-readable byte sizes with a comma as the decimal mark.
//!
//! A byte count is placed in a power-of-1024 tier (Bytes, KB, MB, GB, TB),
//! divided down to that tier and rendered with no decimals for plain bytes
//! and one decimal otherwise. An optional separator goes between number and
//! unit, and an optional suffix after the unit.
//!
//! Empty values (`None`, zero, NaN) render as `"n/a"`. Zero bytes is
//! deliberately treated the same as "no value".
//!
//! ## Example
//!
//! ```rust
//! use trinkets::size::{format_size, SizeFormatter};
//!
//! assert_eq!(format_size(Some(500.0), "", "").unwrap(), "500Bytes");
//! assert_eq!(format_size(Some(1536.0), " ", "").unwrap(), "1,5 KB");
//! assert_eq!(format_size(None, " ", "").unwrap(), "n/a");
//!
//! let free = SizeFormatter::new().with_separator(" ").with_post_fix(" free");
//! assert_eq!(free.format(3u64 * 1024 * 1024 * 1024).unwrap(), "3,0 GB free");
//! ```

mod constants;
mod types;

pub use constants::*;
pub use types::{ByteCount, Tier};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::{Error, Result};

/// Formatter settings for byte counts.
///
/// Both strings default to empty, which yields compact output like `1,0KB`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeFormatter {
    /// Placed between the number and the unit label
    pub separator: String,
    /// Appended after the unit label
    pub post_fix: String,
}

impl SizeFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_post_fix(mut self, post_fix: impl Into<String>) -> Self {
        self.post_fix = post_fix.into();
        self
    }

    /// Formats a byte count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for negative or infinite counts.
    pub fn format(&self, bytes: impl Into<ByteCount>) -> Result<String> {
        self.format_opt(Some(bytes.into().as_f64()))
    }

    /// Formats a byte count that may be missing.
    ///
    /// `None`, zero and NaN all produce `"n/a"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for negative or infinite counts.
    #[instrument(level = "trace", skip(self))]
    pub fn format_opt(&self, bytes: Option<f64>) -> Result<String> {
        let bytes = match bytes.map(ByteCount::new) {
            Some(count) if !count.is_blank() => count.as_f64(),
            _ => return Ok(NOT_AVAILABLE.to_string()),
        };

        if bytes < 0.0 {
            debug!(bytes, "rejecting negative byte count");
            return Err(Error::invalid_input(format!(
                "byte count must not be negative, got {bytes}"
            )));
        }
        if bytes.is_infinite() {
            debug!("rejecting infinite byte count");
            return Err(Error::invalid_input("byte count must be finite"));
        }

        let (value, tier) = scale(bytes);
        trace!(bytes, value, %tier, "scaled byte count");

        let number = to_fixed(value, tier.decimals()).replacen('.', DECIMAL_MARK, 1);
        Ok(format!("{number}{}{}{}", self.separator, tier.label(), self.post_fix))
    }
}

/// Formats a byte count with the given separator and suffix.
///
/// # Examples
///
/// ```rust
/// use trinkets::size::format_size;
///
/// assert_eq!(format_size(Some(1024.0), "", "").unwrap(), "1,0KB");
/// assert_eq!(format_size(Some(1024.0 * 1024.0), " ", " used").unwrap(), "1,0 MB used");
/// assert_eq!(format_size(Some(0.0), "", "").unwrap(), "n/a");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for negative or infinite counts.
pub fn format_size(bytes: Option<f64>, separator: &str, post_fix: &str) -> Result<String> {
    SizeFormatter::new().with_separator(separator).with_post_fix(post_fix).format_opt(bytes)
}

/// Splits a byte count into its tier and the value expressed in that tier.
pub fn scale(bytes: f64) -> (f64, Tier) {
    let tier = Tier::for_bytes(bytes);
    (bytes / tier.divisor(), tier)
}

/// Fixed-point rendering with ties rounded away from zero.
///
/// From `1e21` upward the value is written in exponent form, e.g. `1e+21`.
fn to_fixed(value: f64, decimals: usize) -> String {
    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{value:e}").replacen('e', "e+", 1);
    }

    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.decimals$}")
}
