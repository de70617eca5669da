//! GPIO display driver
//!
//! Drives the segment and digit-enable lines directly from
//! `embedded-hal` output pins (or through transistors / SSR-style buffers
//! with inverted logic).

use embedded_hal::digital::{OutputPin, PinState};
use segmux_core::ScreenDriver;

/// Number of shared segment lines (A-G plus decimal point)
pub const SEGMENT_LINES: usize = 8;

/// Logic level that turns a line on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Line is on when the pin is HIGH
    #[default]
    ActiveHigh,
    /// Line is on when the pin is LOW
    ActiveLow,
}

impl Polarity {
    /// Pin level for a logical line state
    pub fn level(self, on: bool) -> PinState {
        // ActiveHigh: on=true → high
        // ActiveLow:  on=true → low
        PinState::from(on != (self == Polarity::ActiveLow))
    }
}

/// Display driver over GPIO pins
///
/// `segments` are the shared lines in bit order (A, B, C, D, E, F, G, P).
/// `digits` are the digit-enable lines, index 0 first.
pub struct PinDriver<S, G, const N: usize> {
    segments: [S; SEGMENT_LINES],
    digits: [G; N],
    segment_polarity: Polarity,
    digit_polarity: Polarity,
    /// Pin writes that reported an error
    errors: u32,
}

impl<S: OutputPin, G: OutputPin, const N: usize> PinDriver<S, G, N> {
    /// Create a new pin driver
    ///
    /// Every line is switched off before returning.
    pub fn new(
        segments: [S; SEGMENT_LINES],
        digits: [G; N],
        segment_polarity: Polarity,
        digit_polarity: Polarity,
    ) -> Self {
        let mut driver = Self {
            segments,
            digits,
            segment_polarity,
            digit_polarity,
            errors: 0,
        };
        // Ensure the display starts dark
        driver.digits_all_off();
        driver.segments_update(0);
        driver
    }

    /// Common-cathode wiring: segments on HIGH, digit commons on LOW
    pub fn common_cathode(segments: [S; SEGMENT_LINES], digits: [G; N]) -> Self {
        Self::new(segments, digits, Polarity::ActiveHigh, Polarity::ActiveLow)
    }

    /// Common-anode wiring: segments on LOW, digit commons on HIGH
    pub fn common_anode(segments: [S; SEGMENT_LINES], digits: [G; N]) -> Self {
        Self::new(segments, digits, Polarity::ActiveLow, Polarity::ActiveHigh)
    }

    /// Number of pin writes that failed since creation
    ///
    /// [`ScreenDriver`] has no error channel, so failures are only counted.
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Give the pins back
    pub fn release(self) -> ([S; SEGMENT_LINES], [G; N]) {
        (self.segments, self.digits)
    }
}

fn drive<P: OutputPin>(pin: &mut P, state: PinState, errors: &mut u32) {
    if pin.set_state(state).is_err() {
        *errors = errors.saturating_add(1);
    }
}

impl<S: OutputPin, G: OutputPin, const N: usize> ScreenDriver for PinDriver<S, G, N> {
    fn digits_all_off(&mut self) {
        let off = self.digit_polarity.level(false);
        for pin in self.digits.iter_mut() {
            drive(pin, off, &mut self.errors);
        }
    }

    fn segments_update(&mut self, mask: u8) {
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            let level = self.segment_polarity.level(mask & (1 << bit) != 0);
            drive(pin, level, &mut self.errors);
        }
    }

    fn digit_enable(&mut self, index: u8) {
        if let Some(pin) = self.digits.get_mut(index as usize) {
            drive(pin, self.digit_polarity.level(true), &mut self.errors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use segmux_core::segments::{SEGMENT_B, SEGMENT_C, SEGMENT_P};
    use segmux_core::Screen;

    /// Mock GPIO pin for testing
    #[derive(Debug, Clone, Copy, Default)]
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    /// Pin whose writes always fail
    #[derive(Debug, Clone, Copy, Default)]
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    fn levels<const N: usize>(pins: &[MockPin; N]) -> [bool; N] {
        let mut levels = [false; N];
        for (level, pin) in levels.iter_mut().zip(pins) {
            *level = pin.high;
        }
        levels
    }

    #[test]
    fn test_polarity_levels() {
        assert_eq!(Polarity::ActiveHigh.level(true), PinState::High);
        assert_eq!(Polarity::ActiveHigh.level(false), PinState::Low);
        assert_eq!(Polarity::ActiveLow.level(true), PinState::Low);
        assert_eq!(Polarity::ActiveLow.level(false), PinState::High);
    }

    #[test]
    fn test_starts_dark_common_cathode() {
        let driver = PinDriver::common_cathode([MockPin::default(); 8], [MockPin::default(); 4]);
        let (segments, digits) = driver.release();

        assert_eq!(levels(&segments), [false; 8]);
        // Cathodes held high = digits off
        assert_eq!(levels(&digits), [true; 4]);
    }

    #[test]
    fn test_starts_dark_common_anode() {
        let driver = PinDriver::common_anode([MockPin::default(); 8], [MockPin::default(); 4]);
        let (segments, digits) = driver.release();

        assert_eq!(levels(&segments), [true; 8]);
        assert_eq!(levels(&digits), [false; 4]);
    }

    #[test]
    fn test_segments_follow_mask_bits() {
        let mut driver = PinDriver::new(
            [MockPin::default(); 8],
            [MockPin::default(); 2],
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
        );

        driver.segments_update(0b1000_0101);
        let (segments, _) = driver.release();

        assert_eq!(
            levels(&segments),
            [true, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn test_single_digit_enabled() {
        let mut driver = PinDriver::new(
            [MockPin::default(); 8],
            [MockPin::default(); 4],
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
        );

        driver.digit_enable(2);
        driver.digits_all_off();
        driver.digit_enable(1);
        let (_, digits) = driver.release();

        assert_eq!(levels(&digits), [false, true, false, false]);
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let mut driver = PinDriver::new(
            [MockPin::default(); 8],
            [MockPin::default(); 2],
            Polarity::ActiveHigh,
            Polarity::ActiveHigh,
        );

        driver.digit_enable(2);
        driver.digit_enable(200);
        let (_, digits) = driver.release();

        assert_eq!(levels(&digits), [false, false]);
        assert!(digits.iter().all(|pin| pin.writes == 1));
    }

    #[test]
    fn test_errors_are_counted() {
        let mut driver = PinDriver::new(
            [BrokenPin; 8],
            [MockPin::default(); 2],
            Polarity::ActiveHigh,
            Polarity::ActiveLow,
        );
        // Initial segment clear fails on all 8 lines
        assert_eq!(driver.error_count(), 8);

        driver.digits_all_off();
        assert_eq!(driver.error_count(), 8);

        driver.segments_update(0xFF);
        assert_eq!(driver.error_count(), 16);
    }

    #[test]
    fn test_drives_screen() {
        let driver = PinDriver::common_cathode([MockPin::default(); 8], [MockPin::default(); 3]);
        let mut screen = Screen::new(3, driver);
        screen.write_bcd(&[4, 1, 0]).unwrap();
        screen.set_point(1);

        screen.refresh();
        let (segments, digits) = screen.release().release();

        // Digit 1 showing "1." with its cathode pulled low
        let expected = SEGMENT_B | SEGMENT_C | SEGMENT_P;
        for (bit, lit) in levels(&segments).iter().enumerate() {
            assert_eq!(*lit, expected & (1 << bit) != 0);
        }
        assert_eq!(levels(&digits), [true, false, true]);
    }
}
