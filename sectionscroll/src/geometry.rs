use core::ops::{Add, Mul, Sub};

/// A 2D point/vector in scroll space.
///
/// `x` is the horizontal transform and `y` the vertical transform. Animation deltas may be
/// negative, so components are floating point; [`Point::round_x`]/[`Point::round_y`] convert back
/// to signed pixel requests that the resolvers clamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from integer scroll transforms.
    pub fn from_transforms(horizontal: u64, vertical: u64) -> Self {
        Self {
            x: horizontal as f64,
            y: vertical as f64,
        }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn round_x(self) -> i64 {
        round_half_away(self.x)
    }

    pub fn round_y(self) -> i64 {
        round_half_away(self.y)
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

// `f64::round` lives in std; this keeps `no_std` builds working. NaN maps to 0.
fn round_half_away(v: f64) -> i64 {
    if v.is_nan() {
        return 0;
    }
    if v >= 0.0 {
        (v + 0.5) as i64
    } else {
        (v - 0.5) as i64
    }
}
