//! Trinkets - small presentation helpers
//!
//! This crate bundles three independent helpers that tend to show up in web
//! dashboards and admin panels. None of them depends on the others.
//!
//! # Features
//!
//! - **Size formatting**: turn a byte count into a short string such as `1,5 MB`
//! - **Gradient generation**: build random multi-layer CSS gradient backgrounds
//! - **Rounding views**: ceiling, floor and JavaScript-style rounding of numbers
//!
//! # Examples
//!
//! ```rust
//! use trinkets::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Humanize a byte count
//!     let used = format_size(Some(1024.0 * 1024.0), " ", " used")?;
//!     assert_eq!(used, "1,0 MB used");
//!
//!     // Random gradient, ready for `style.background`
//!     let background = generate_gradient_background();
//!     assert!(background.contains("-gradient("));
//!
//!     // Rounding accessors
//!     assert_eq!(22.11_f64.rounding().ceil(), 23.0);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Operations that can reject their input return the crate [`Result`]:
//!
//! ```rust
//! use trinkets::{Error, size::format_size};
//!
//! // Negative sizes are refused rather than rendered as garbage
//! let err = format_size(Some(-1.0), "", "").unwrap_err();
//! assert!(matches!(err, Error::InvalidInput(_)));
//! ```
//!
//! # Thread Safety
//!
//! Everything here is synchronous and free of shared state. The free-standing
//! gradient function draws from the thread-local RNG, so it can be called from
//! any number of threads at once.

#![doc(html_root_url = "https://docs.rs/trinkets/0.1.0")]

use thiserror::Error;

/// Error type for trinkets operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Cannot choose from an empty sequence")]
    EmptySequence,
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for trinkets operations
pub type Result<T> = std::result::Result<T, Error>;

// Public modules
#[cfg(feature = "gradient")]
pub mod gradient;
#[cfg(feature = "rounding")]
pub mod rounding;
#[cfg(feature = "size")]
pub mod size;

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::Error;
    pub use crate::Result;
    #[cfg(feature = "gradient")]
    pub use crate::gradient::{
        generate_gradient_background, GradientBackground, GradientConfig, GradientGenerator,
        GradientLayer, RandomSource, RngSource, ThreadRandom,
    };
    #[cfg(feature = "rounding")]
    pub use crate::rounding::{ceil_of, floor_of, round_of, Rounding, RoundingAccessors};
    #[cfg(feature = "size")]
    pub use crate::size::{format_size, ByteCount, SizeFormatter, Tier};
}
