//! Strongly-typed numeric primitives for sheet layout (zero-cost newtypes).
//!
//! Physical geometry is in inches ([`Length`]), font sizes are in points
//! ([`Pt`]), and anything measured on the rendering surface is in CSS pixels
//! ([`Px`]). Conversions go through [`Scaler`] or the explicit helpers below.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Points per inch used by the font-fit heuristics.
pub const POINTS_PER_INCH: f64 = 72.0;

/// CSS pixels per inch used by the rendering surface.
pub const PX_PER_INCH: f64 = 96.0;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Length in inches (physical page unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a Length from inches (const-friendly, unchecked).
    #[inline]
    pub const fn inches(val: f64) -> Length {
        Length(val)
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        check_positive(val).map(Length)
    }

    /// Convert to points (1in = 72pt).
    #[inline]
    pub fn to_points(self) -> Pt {
        Pt(self.0 * POINTS_PER_INCH)
    }

}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

/// Font size in typographic points
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Pt(pub f64);

impl Pt {
    /// Clamp into `[lo, hi]` (lo wins if the bounds cross, matching `max(lo, min(hi, v))`).
    #[inline]
    pub fn clamp_to(self, lo: Pt, hi: Pt) -> Pt {
        Pt(lo.0.max(hi.0.min(self.0)))
    }

    #[inline]
    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }

    /// Convert to CSS pixels (1pt = 96/72 px).
    #[inline]
    pub fn to_px(self) -> Px {
        Px(self.0 * PX_PER_INCH / POINTS_PER_INCH)
    }
}

impl Div<f64> for Pt {
    type Output = Pt;
    fn div(self, rhs: f64) -> Pt { Pt(self.0 / rhs) }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// CSS pixels on the rendering surface
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    /// Create a strictly positive pixel value with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Px, NumericError> {
        check_positive(val).map(Px)
    }

    #[inline]
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Px {
    type Output = Px;
    fn add(self, rhs: Px) -> Px { Px(self.0 + rhs.0) }
}
impl Sub for Px {
    type Output = Px;
    fn sub(self, rhs: Px) -> Px { Px(self.0 - rhs.0) }
}
impl Mul<f64> for Px {
    type Output = Px;
    fn mul(self, rhs: f64) -> Px { Px(self.0 * rhs) }
}
impl Div<f64> for Px {
    type Output = Px;
    fn div(self, rhs: f64) -> Px { Px(self.0 / rhs) }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T: Copy> Size<T> {
    /// The same size with width and height exchanged.
    pub fn transposed(self) -> Self {
        Size { w: self.h, h: self.w }
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

/// Convert inches → px with a given scale (CSS uses 96).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub px_per_inch: f64,
}

impl Default for Scaler {
    fn default() -> Self {
        Scaler { px_per_inch: PX_PER_INCH }
    }
}

impl Scaler {
    /// Convert a length in inches to pixels.
    #[inline]
    pub fn len(&self, l: Length) -> Px {
        Px(l.0 * self.px_per_inch)
    }

    /// Convert a size in inches to pixels.
    pub fn size(&self, s: Size<Length>) -> Size<Px> {
        Size { w: self.len(s.w), h: self.len(s.h) }
    }

    /// Convert a point in inches to pixels.
    pub fn point(&self, p: Point<Length>) -> Point<Px> {
        Point { x: self.len(p.x), y: self.len(p.y) }
    }
}

/// Convenient aliases
pub type SizeIn = Size<Length>;
pub type SizePx = Size<Px>;
pub type PtIn = Point<Length>;
