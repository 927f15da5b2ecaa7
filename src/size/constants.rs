/// Placeholder returned for empty, zero or NaN byte counts
pub const NOT_AVAILABLE: &str = "n/a";

/// Bytes per step between two adjacent tiers
pub const UNIT_BASE: f64 = 1024.0;

/// Binary exponent of [`UNIT_BASE`]
pub const UNIT_BASE_LOG2: f64 = 10.0;

/// Unit labels, indexed by tier
pub const UNIT_LABELS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Decimal mark written in place of `.`
pub const DECIMAL_MARK: &str = ",";

/// Fraction digits used for every tier above plain bytes
pub const SCALED_DECIMALS: usize = 1;

/// Scaled values at or above this are written in exponent form
pub const EXPONENT_THRESHOLD: f64 = 1e21;
