use std::fmt;

use serde::{Serialize, Serializer};

/// RGBA color with 8-bit channels and a normalized alpha.
///
/// Serializes in CSS `rgba(r, g, b, a)` form so any CSS-compatible renderer
/// can consume it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fixed slice palette for proportion charts.
///
/// Index assignment wraps modulo the palette length so repeated renders of
/// the same breakdown stay visually stable.
pub const SLICE_PALETTE: [Rgba; 5] = [
    Rgba::rgba(255, 99, 132, 0.7),
    Rgba::rgba(54, 162, 235, 0.7),
    Rgba::rgba(255, 206, 86, 0.7),
    Rgba::rgba(75, 192, 192, 0.7),
    Rgba::rgba(153, 102, 255, 0.7),
];

/// Returns the palette color assigned to a slice index, cycling modulo the
/// palette length.
#[must_use]
pub fn palette_color(index: usize) -> Rgba {
    SLICE_PALETTE[index % SLICE_PALETTE.len()]
}
