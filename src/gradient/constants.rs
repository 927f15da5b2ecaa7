/// Exclusive digit cap covering the whole hex range
pub const FULL_DIGIT_CAP: u8 = 16;

/// Exclusive digit cap used by the gradient builders, keeping away from the lightest shades
pub const MUTED_DIGIT_CAP: u8 = 14;

/// Hex digits in a color code, without the leading `#`
pub const HEX_COLOR_DIGITS: usize = 6;

/// Angles are drawn from `[0, FULL_TURN_DEGREES)`
pub const FULL_TURN_DEGREES: u16 = 360;

/// Bounds (inclusive) for the number of colors in a linear gradient
pub const MIN_CHAIN_COLORS: usize = 2;
pub const MAX_CHAIN_COLORS: usize = 3;

/// Bounds (inclusive) for the number of layers in a background
pub const MIN_BACKGROUND_LAYERS: usize = 2;
pub const MAX_BACKGROUND_LAYERS: usize = 3;

/// CSS fragments
pub const LINEAR_GRADIENT_FN: &str = "linear-gradient";
pub const RADIAL_GRADIENT_FN: &str = "radial-gradient";
pub const RADIAL_SHAPE: &str = "ellipse";
pub const TRANSPARENT_STOP: &str = "transparent";
pub const LIST_SEPARATOR: &str = ", ";
