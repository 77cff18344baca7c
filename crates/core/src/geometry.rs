//! Length and position types for slide layout.
//!
//! All positions and sizes in the document model are English Metric
//! Units (EMU), the native length unit of DrawingML. 914400 EMU equal
//! one inch, so inch-based layout constants convert exactly.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A length in English Metric Units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Emu(pub i64);

impl Emu {
    /// EMU per inch.
    pub const PER_INCH: i64 = 914_400;

    /// EMU per typographic point (1/72 inch).
    pub const PER_POINT: i64 = 12_700;

    /// Zero length.
    pub const ZERO: Emu = Emu(0);

    /// Convert inches to EMU, rounding to the nearest unit.
    pub fn inches(value: f64) -> Self {
        Emu((value * Self::PER_INCH as f64).round() as i64)
    }

    /// Convert typographic points to EMU, rounding to the nearest unit.
    pub fn points(value: f64) -> Self {
        Emu((value * Self::PER_POINT as f64).round() as i64)
    }

    /// The raw EMU value.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Left/top offset that centers a span of this length inside `outer`.
    pub fn centered_in(self, outer: Emu) -> Emu {
        Emu((outer.0 - self.0) / 2)
    }

    /// Scale by a ratio, rounding to the nearest unit.
    pub fn scale(self, ratio: f64) -> Emu {
        Emu((self.0 as f64 * ratio).round() as i64)
    }
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Sub for Emu {
    type Output = Emu;

    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;

    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

impl Div<i64> for Emu {
    type Output = Emu;

    fn div(self, rhs: i64) -> Emu {
        Emu(self.0 / rhs)
    }
}

/// Position and size of a shape on a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    /// Create a frame from left/top/width/height.
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bottom edge (top + height).
    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }
}
