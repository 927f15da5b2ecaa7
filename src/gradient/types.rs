use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::constants::{
    FULL_DIGIT_CAP, FULL_TURN_DEGREES, HEX_COLOR_DIGITS, LINEAR_GRADIENT_FN, LIST_SEPARATOR,
    MUTED_DIGIT_CAP, RADIAL_GRADIENT_FN, RADIAL_SHAPE, TRANSPARENT_STOP,
};
use crate::{Error, Result};

/// Exclusive upper bound for every digit of a random hex color.
///
/// Valid caps are `1..=16`. A cap of 16 allows the full range, lower caps
/// bias colors toward darker shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DigitCap(u8);

impl DigitCap {
    /// Every hex digit allowed
    pub const FULL: Self = Self(FULL_DIGIT_CAP);
    /// Digits `0` through `d`, used for gradients that sit behind white text
    pub const MUTED: Self = Self(MUTED_DIGIT_CAP);

    /// Creates a cap, rejecting values outside `1..=16`
    pub fn new(cap: u8) -> Result<Self> {
        if (1..=FULL_DIGIT_CAP).contains(&cap) {
            Ok(Self(cap))
        } else {
            Err(Error::invalid_input(format!("digit cap must be within 1..=16, got {cap}")))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DigitCap {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u8> for DigitCap {
    type Error = Error;

    fn try_from(cap: u8) -> Result<Self> {
        Self::new(cap)
    }
}

impl From<DigitCap> for u8 {
    fn from(cap: DigitCap) -> Self {
        cap.0
    }
}

/// A six digit hex color such as `#3a0c9d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; HEX_COLOR_DIGITS]);

impl HexColor {
    /// Creates a color from six digit values, each below 16
    pub fn new(digits: [u8; HEX_COLOR_DIGITS]) -> Result<Self> {
        match digits.iter().find(|&&digit| digit >= FULL_DIGIT_CAP) {
            Some(digit) => Err(Error::invalid_input(format!("hex digit out of range: {digit}"))),
            None => Ok(Self(digits)),
        }
    }

    pub(crate) fn from_digits(digits: [u8; HEX_COLOR_DIGITS]) -> Self {
        debug_assert!(digits.iter().all(|&digit| digit < FULL_DIGIT_CAP));
        Self(digits)
    }

    pub fn digits(&self) -> [u8; HEX_COLOR_DIGITS] {
        self.0
    }

    /// Whether every digit is below `cap`
    pub fn fits_under(&self, cap: DigitCap) -> bool {
        self.0.iter().all(|&digit| digit < cap.get())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#")?;
        for digit in self.0 {
            write!(f, "{digit:x}")?;
        }
        Ok(())
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| Error::invalid_input(format!("hex color must start with '#': {s:?}")))?;
        if hex.chars().count() != HEX_COLOR_DIGITS {
            return Err(Error::invalid_input(format!("hex color must have six digits: {s:?}")));
        }

        let mut digits = [0u8; HEX_COLOR_DIGITS];
        for (slot, ch) in digits.iter_mut().zip(hex.chars()) {
            *slot = ch
                .to_digit(16)
                .ok_or_else(|| Error::invalid_input(format!("not a hex digit: {ch:?}")))?
                as u8;
        }
        Ok(Self(digits))
    }
}

/// Gradient angle in whole degrees, `0..360`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(u16);

impl Angle {
    pub fn new(degrees: u16) -> Result<Self> {
        if degrees < FULL_TURN_DEGREES {
            Ok(Self(degrees))
        } else {
            Err(Error::invalid_input(format!("angle must be below 360, got {degrees}")))
        }
    }

    pub(crate) fn from_degrees(degrees: u16) -> Self {
        debug_assert!(degrees < FULL_TURN_DEGREES);
        Self(degrees)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}deg", self.0)
    }
}

/// Vertical part of a CSS `<position>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
    /// No vertical keyword; the browser centers vertically
    Center,
}

impl VerticalEdge {
    pub const ALL: [Self; 3] = [Self::Top, Self::Bottom, Self::Center];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "",
        }
    }
}

/// Horizontal part of a CSS `<position>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    Left,
    Right,
}

impl HorizontalEdge {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Radial gradient center.
///
/// Renders as `"<vertical> <horizontal>"`. With [`VerticalEdge::Center`] the
/// vertical keyword is empty and the output starts with the space, e.g. `" left"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertical.keyword(), self.horizontal.keyword())
    }
}

/// One layer of a CSS background
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientLayer {
    /// `linear-gradient(<angle>, <color>, <color>[, <color>])`
    Linear { angle: Angle, colors: Vec<HexColor> },
    /// `radial-gradient(ellipse at <position>, <color>, transparent)`
    Radial { position: Position, color: HexColor },
}

impl GradientLayer {
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear { .. })
    }

    /// Every color stop in the layer, `transparent` excluded
    pub fn colors(&self) -> &[HexColor] {
        match self {
            Self::Linear { colors, .. } => colors,
            Self::Radial { color, .. } => std::slice::from_ref(color),
        }
    }
}

impl fmt::Display for GradientLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear { angle, colors } => {
                write!(f, "{LINEAR_GRADIENT_FN}({angle}{LIST_SEPARATOR}")?;
                write_joined(f, colors)?;
                f.write_str(")")
            }
            Self::Radial { position, color } => {
                write!(f, "{RADIAL_GRADIENT_FN}({RADIAL_SHAPE} at {position}{LIST_SEPARATOR}")?;
                write!(f, "{color}{LIST_SEPARATOR}{TRANSPARENT_STOP})")
            }
        }
    }
}

/// A stack of gradient layers, rendered as one `background` value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradientBackground(Vec<GradientLayer>);

impl GradientBackground {
    pub fn new(layers: Vec<GradientLayer>) -> Self {
        Self(layers)
    }

    pub fn layers(&self) -> &[GradientLayer] {
        &self.0
    }

    pub fn into_layers(self) -> Vec<GradientLayer> {
        self.0
    }
}

impl fmt::Display for GradientBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.0)
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(LIST_SEPARATOR)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
