//! Colour handling for SVG figures.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const GRAY: Rgb = Rgb { r: 128, g: 128, b: 128 };
    pub(crate) const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub(crate) const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

impl fmt::Display for Rgb {
    /// Format as hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The ten-colour categorical cycle used for successive patches.
const CYCLE: [Rgb; 10] = [
    Rgb { r: 0x1f, g: 0x77, b: 0xb4 },
    Rgb { r: 0xff, g: 0x7f, b: 0x0e },
    Rgb { r: 0x2c, g: 0xa0, b: 0x2c },
    Rgb { r: 0xd6, g: 0x27, b: 0x28 },
    Rgb { r: 0x94, g: 0x67, b: 0xbd },
    Rgb { r: 0x8c, g: 0x56, b: 0x4b },
    Rgb { r: 0xe3, g: 0x77, b: 0xc2 },
    Rgb { r: 0x7f, g: 0x7f, b: 0x7f },
    Rgb { r: 0xbc, g: 0xbd, b: 0x22 },
    Rgb { r: 0x17, g: 0xbe, b: 0xcf },
];

/// Default colour of the `index`-th patch on a figure.
#[inline]
pub(crate) fn cycle_color(index: usize) -> Rgb {
    CYCLE[index % CYCLE.len()]
}
