//! RGB color type with DrawingML hex rendering.

use serde::{Deserialize, Serialize};

/// A solid RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// White, used by several templates and the final repaint pass.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Create a color from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Uppercase hex form without a leading `#`, as DrawingML expects
    /// in `srgbClr` values.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_uppercase() {
        assert_eq!(Rgb(0, 180, 136).hex(), "00B488");
        assert_eq!(Rgb(28, 34, 43).hex(), "1C222B");
    }

    #[test]
    fn test_hex_bounds() {
        assert_eq!(Rgb(0, 0, 0).hex(), "000000");
        assert_eq!(Rgb(255, 255, 255).hex(), "FFFFFF");
    }
}
