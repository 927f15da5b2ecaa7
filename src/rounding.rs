//! # Rounding Module
//!
//! Ceiling, floor and rounding views for numeric values.
//!
//! The views are available two ways: as plain functions ([`ceil_of`],
//! [`floor_of`], [`round_of`]) and through the [`RoundingAccessors`]
//! extension trait. The trait only takes effect where it is imported.
//!
//! Rounding follows JavaScript's `Math.round`: halves go toward positive
//! infinity, so `2.5` becomes `3` and `-2.5` becomes `-2`. This differs from
//! [`f64::round`], which rounds halves away from zero.
//!
//! ## Example
//!
//! ```rust
//! use trinkets::rounding::RoundingAccessors;
//!
//! let view = 22.11_f64.rounding();
//! assert_eq!(view.ceil(), 23.0);
//! assert_eq!(view.floor(), 22.0);
//! assert_eq!(view.round(), 22.0);
//! ```

/// Smallest integer not less than `x`
pub fn ceil_of(x: f64) -> f64 {
    x.ceil()
}

/// Largest integer not greater than `x`
pub fn floor_of(x: f64) -> f64 {
    x.floor()
}

/// Nearest integer to `x`, halves toward positive infinity.
///
/// NaN and infinities pass through; a negative input that rounds to zero
/// yields `-0.0`.
pub fn round_of(x: f64) -> f64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 {
        // keep the sign of the input on zero
        0.0_f64.copysign(x)
    } else {
        rounded
    }
}

/// Read-only rounding view over a number.
///
/// Only the source value is stored; each accessor computes its result when
/// called.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rounding(f64);

impl Rounding {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The value the view was taken from
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn ceil(self) -> f64 {
        ceil_of(self.0)
    }

    pub fn floor(self) -> f64 {
        floor_of(self.0)
    }

    pub fn round(self) -> f64 {
        round_of(self.0)
    }
}

/// Adds a [`Rounding`] view to the primitive numeric types
pub trait RoundingAccessors {
    fn rounding(self) -> Rounding;
}

macro_rules! impl_rounding_lossless {
    ($($ty:ty),*) => {
        $(
            impl RoundingAccessors for $ty {
                fn rounding(self) -> Rounding {
                    Rounding(f64::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_rounding_wide {
    ($($ty:ty),*) => {
        $(
            impl RoundingAccessors for $ty {
                fn rounding(self) -> Rounding {
                    Rounding(self as f64)
                }
            }
        )*
    };
}

impl_rounding_lossless!(f32, f64, u8, u16, u32, i8, i16, i32);
impl_rounding_wide!(u64, usize, i64, isize);
