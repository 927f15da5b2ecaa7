use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{SCALED_DECIMALS, UNIT_BASE, UNIT_BASE_LOG2, UNIT_LABELS};

/// Power-of-1024 magnitude bucket used to pick a display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Plain bytes, rendered without decimals
    Bytes,
    /// 1024 bytes
    Kilobytes,
    /// 1024² bytes
    Megabytes,
    /// 1024³ bytes
    Gigabytes,
    /// 1024⁴ bytes, the largest tier; anything bigger is still shown in TB
    Terabytes,
}

impl Tier {
    /// All tiers in ascending order
    pub const ALL: [Tier; 5] =
        [Self::Bytes, Self::Kilobytes, Self::Megabytes, Self::Gigabytes, Self::Terabytes];

    /// Returns the tier at `index`, if there is one
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Selects the tier for a byte count.
    ///
    /// The index is `floor(log1024(bytes))` clamped to `[0, 4]`. Counts below
    /// one byte, and inputs without a logarithm (zero, negative, NaN), fall
    /// back to [`Tier::Bytes`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trinkets::size::Tier;
    ///
    /// assert_eq!(Tier::for_bytes(1023.0), Tier::Bytes);
    /// assert_eq!(Tier::for_bytes(1024.0), Tier::Kilobytes);
    /// assert_eq!(Tier::for_bytes(1e30), Tier::Terabytes);
    /// ```
    pub fn for_bytes(bytes: f64) -> Self {
        // log2 is exact on powers of two, so 1024^n lands on tier n
        let raw = (bytes.log2() / UNIT_BASE_LOG2).floor();
        if !(raw >= 1.0) {
            return Self::Bytes;
        }

        let last = Self::ALL.len() - 1;
        let mut index = if raw >= last as f64 { last } else { raw as usize };
        // log2 can round up to the next tier just below a boundary
        while index > 0 && bytes < Self::ALL[index].divisor() {
            index -= 1;
        }
        Self::ALL[index]
    }

    /// Position of the tier in [`Tier::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, e.g. `"KB"`
    pub fn label(self) -> &'static str {
        UNIT_LABELS[self.index()]
    }

    /// Number of bytes in one unit of this tier
    pub fn divisor(self) -> f64 {
        UNIT_BASE.powi(self.index() as i32)
    }

    /// Fraction digits shown for values in this tier
    pub fn decimals(self) -> usize {
        match self {
            Self::Bytes => 0,
            _ => SCALED_DECIMALS,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A number of bytes, as accepted by the size formatter.
///
/// Integers and floats convert into it, so callers can pass whatever their
/// byte counters happen to be.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteCount(pub f64);

impl ByteCount {
    /// Creates a new ByteCount from a raw value
    pub fn new(bytes: f64) -> Self {
        Self(bytes)
    }

    /// Returns the raw value
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Whether the count reads as "no value": zero, negative zero or NaN
    pub fn is_blank(&self) -> bool {
        self.0 == 0.0 || self.0.is_nan()
    }
}

macro_rules! impl_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ByteCount {
                fn from(value: $ty) -> Self {
                    Self(f64::from(value))
                }
            }
        )*
    };
}

// Wider integers may round above 2^53, which is far past the TB tier anyway
macro_rules! impl_from_wide {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ByteCount {
                fn from(value: $ty) -> Self {
                    Self(value as f64)
                }
            }
        )*
    };
}

impl_from_lossless!(u8, u16, u32, i8, i16, i32, f32, f64);
impl_from_wide!(u64, u128, usize, i64, i128, isize);
