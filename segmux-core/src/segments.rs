//! Segment bit assignment and the decimal glyph table
//!
//! Segment layout:
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD  P
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segment A (top horizontal)
pub const SEGMENT_A: u8 = 1 << 0;
/// Segment B (top right vertical)
pub const SEGMENT_B: u8 = 1 << 1;
/// Segment C (bottom right vertical)
pub const SEGMENT_C: u8 = 1 << 2;
/// Segment D (bottom horizontal)
pub const SEGMENT_D: u8 = 1 << 3;
/// Segment E (bottom left vertical)
pub const SEGMENT_E: u8 = 1 << 4;
/// Segment F (top left vertical)
pub const SEGMENT_F: u8 = 1 << 5;
/// Segment G (middle horizontal)
pub const SEGMENT_G: u8 = 1 << 6;
/// Decimal point
pub const SEGMENT_P: u8 = 1 << 7;

/// Segment images for the decimal digits 0-9
///
/// Note that 9 carries the same image as 0 (no segment G). Use
/// [`NineStyle::Standard`] to render a conventional 9.
pub const DIGIT_IMAGES: [u8; 10] = [
    SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_E | SEGMENT_F, // 0
    SEGMENT_B | SEGMENT_C,                                                 // 1
    SEGMENT_A | SEGMENT_B | SEGMENT_D | SEGMENT_E | SEGMENT_G,             // 2
    SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_G,             // 3
    SEGMENT_B | SEGMENT_C | SEGMENT_F | SEGMENT_G,                         // 4
    SEGMENT_A | SEGMENT_C | SEGMENT_D | SEGMENT_F | SEGMENT_G,             // 5
    SEGMENT_A | SEGMENT_C | SEGMENT_D | SEGMENT_E | SEGMENT_F | SEGMENT_G, // 6
    SEGMENT_A | SEGMENT_B | SEGMENT_C,                                     // 7
    SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_E | SEGMENT_F | SEGMENT_G, // 8
    SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_E | SEGMENT_F, // 9
];

/// Conventional 9 (A, B, C, D, F, G)
const STANDARD_NINE: u8 = SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_F | SEGMENT_G;

/// How the digit 9 is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NineStyle {
    /// Table entry as shipped, identical to 0
    #[default]
    Legacy,
    /// A, B, C, D, F and G lit
    Standard,
}

/// Look up the segment image of a decimal digit
///
/// Returns `None` for values above 9.
pub const fn digit_image(value: u8, style: NineStyle) -> Option<u8> {
    match (value, style) {
        (9, NineStyle::Standard) => Some(STANDARD_NINE),
        (0..=9, _) => Some(DIGIT_IMAGES[value as usize]),
        _ => None,
    }
}
