//! Screen errors

use core::fmt;

/// Errors reported by screen configuration and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenError {
    /// Flash range is reversed or reaches past `MAX_DIGITS`
    InvalidFlashRange {
        /// First digit requested
        from: u8,
        /// Last digit requested (inclusive)
        to: u8,
    },
    /// BCD value outside 0-9
    InvalidDigit(u8),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::InvalidFlashRange { from, to } => {
                write!(f, "invalid flash range {}..={}", from, to)
            }
            ScreenError::InvalidDigit(value) => write!(f, "invalid BCD digit {}", value),
        }
    }
}
