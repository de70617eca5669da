//! Screen configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::segments::NineStyle;

/// Maximum digit positions a screen can drive
pub const MAX_DIGITS: usize = 8;

/// Digit count used when none is configured
pub const DEFAULT_DIGITS: u8 = 4;

/// Screen configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenConfig {
    /// Number of digit positions wired (clamped to 1..=MAX_DIGITS)
    pub digits: u8,
    /// Glyph used for the digit 9
    pub nine: NineStyle,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            nine: NineStyle::Legacy,
        }
    }
}

impl ScreenConfig {
    /// Create a config for `digits` positions with the legacy glyph table
    pub const fn new(digits: u8) -> Self {
        Self {
            digits,
            nine: NineStyle::Legacy,
        }
    }

    /// Use the conventional glyph for 9
    pub const fn with_standard_nine(mut self) -> Self {
        self.nine = NineStyle::Standard;
        self
    }

    /// Digit count actually driven
    ///
    /// Counts above [`MAX_DIGITS`] are clamped silently; 0 is raised to 1.
    pub const fn effective_digits(&self) -> u8 {
        if self.digits as usize > MAX_DIGITS {
            MAX_DIGITS as u8
        } else if self.digits == 0 {
            1
        } else {
            self.digits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreenConfig::default();
        assert_eq!(config.digits, 4);
        assert_eq!(config.nine, NineStyle::Legacy);
    }

    #[test]
    fn test_effective_digits_clamps() {
        assert_eq!(ScreenConfig::new(0).effective_digits(), 1);
        assert_eq!(ScreenConfig::new(6).effective_digits(), 6);
        assert_eq!(ScreenConfig::new(8).effective_digits(), 8);
        assert_eq!(ScreenConfig::new(9).effective_digits(), 8);
        assert_eq!(ScreenConfig::new(255).effective_digits(), 8);
    }

    #[test]
    fn test_standard_nine_builder() {
        let config = ScreenConfig::new(6).with_standard_nine();
        assert_eq!(config.digits, 6);
        assert_eq!(config.nine, NineStyle::Standard);
    }
}
