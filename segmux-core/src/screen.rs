//! Multiplexed 7-segment screen
//!
//! The screen keeps one segment image per digit position and lights a single
//! position per [`Screen::refresh`] call. Calling `refresh` at a fixed rate
//! (typically from a timer interrupt, 1-2 kHz for a 4-8 digit display) makes
//! all positions appear continuously lit.
//!
//! Two independent blink generators are layered on top of the image:
//!
//! - digit flashing blanks an inclusive range of positions during the second
//!   half of its period
//! - point flashing hides the decimal points marked as flashing during the
//!   second half of its own period
//!
//! Both periods are counted in frames. A frame is one pass over all digit
//! positions, so blink timing scales with the refresh rate divided by the
//! digit count.
//!
//! # Usage
//!
//! ```ignore
//! let mut screen = Screen::new(4, driver);
//! screen.write_bcd(&[1, 2, 3, 4])?;
//! screen.set_point(1);
//! screen.flash_digits(2, 3, 50)?;
//!
//! // In the periodic timer interrupt:
//! screen.refresh();
//! ```

use crate::config::{ScreenConfig, MAX_DIGITS};
use crate::driver::ScreenDriver;
use crate::error::ScreenError;
use crate::log::{debug, warning};
use crate::segments::{digit_image, NineStyle, SEGMENT_P};

/// Decimal point state of one digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointState {
    /// Point dark
    #[default]
    Off,
    /// Point steadily lit
    On,
    /// Point lit during the visible half of the shared point period
    Flashing,
}

/// Active digit flashing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FlashRange {
    /// First flashing position
    pub from: u8,
    /// Last flashing position (inclusive)
    pub to: u8,
    /// Blink period in frames
    pub period: u32,
}

impl FlashRange {
    /// Check if a digit position lies within the range
    pub fn contains(&self, digit: u8) -> bool {
        digit >= self.from && digit <= self.to
    }
}

/// Frame-counted blink generator
///
/// A period of 0 means the generator is off: the phase never moves and
/// `visible` is always false, so callers gate on `is_enabled` where
/// "off" should mean "shown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Blink {
    period: u32,
    phase: u32,
}

impl Blink {
    fn new(period: u32) -> Self {
        Self { period, phase: 0 }
    }

    fn from_divisor(divisor: u32) -> Self {
        Self::new(2 * divisor)
    }

    fn is_enabled(&self) -> bool {
        self.period > 0
    }

    /// Step one frame
    fn advance(&mut self) {
        if self.is_enabled() {
            self.phase = (self.phase + 1) % self.period;
        }
    }

    /// First half of the period is visible, second half dark
    fn visible(&self) -> bool {
        self.phase < self.period / 2
    }
}

/// Multiplexed 7-segment screen
///
/// Owns the per-digit image and blink state, and drives the hardware through
/// `D`. Pass `&mut driver` to keep the driver owned elsewhere.
pub struct Screen<D> {
    driver: D,
    /// Number of digit positions driven
    digits: u8,
    /// Position lit by the last refresh
    current_digit: u8,
    /// Glyph used for 9
    nine: NineStyle,
    /// Segment image per position
    images: [u8; MAX_DIGITS],
    /// Decimal point per position
    points: [PointState; MAX_DIGITS],
    /// Positions blanked while digit flashing is dark
    flash_from: u8,
    flash_to: u8,
    digit_blink: Blink,
    point_blink: Blink,
}

impl<D: ScreenDriver> Screen<D> {
    /// Create a screen driving `digits` positions
    ///
    /// Counts above [`MAX_DIGITS`] are clamped silently and 0 is raised to 1.
    /// The screen starts blank with flashing disabled.
    pub fn new(digits: u8, driver: D) -> Self {
        Self::with_config(&ScreenConfig::new(digits), driver)
    }

    /// Create a screen from a configuration
    pub fn with_config(config: &ScreenConfig, driver: D) -> Self {
        let digits = config.effective_digits();
        debug!("screen: {} digits", digits);

        Self {
            driver,
            digits,
            current_digit: 0,
            nine: config.nine,
            images: [0; MAX_DIGITS],
            points: [PointState::Off; MAX_DIGITS],
            flash_from: 0,
            flash_to: 0,
            digit_blink: Blink::default(),
            point_blink: Blink::default(),
        }
    }

    /// Number of digit positions driven
    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Position lit by the last refresh
    pub fn current_digit(&self) -> u8 {
        self.current_digit
    }

    /// Stored segment image of a position, without blink or point overlay
    pub fn segment_image(&self, digit: u8) -> Option<u8> {
        self.images.get(digit as usize).copied()
    }

    /// Decimal point state of a position
    pub fn point(&self, digit: u8) -> Option<PointState> {
        self.points.get(digit as usize).copied()
    }

    /// Current digit flashing configuration, `None` when disabled
    pub fn digit_flash(&self) -> Option<FlashRange> {
        self.digit_blink.is_enabled().then_some(FlashRange {
            from: self.flash_from,
            to: self.flash_to,
            period: self.digit_blink.period,
        })
    }

    /// Shared decimal point blink period in frames (0 = not flashing)
    pub fn point_flash_period(&self) -> u32 {
        self.point_blink.period
    }

    /// Borrow the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the screen and hand back the driver
    pub fn release(self) -> D {
        self.driver
    }

    /// Show a sequence of decimal digits, left to right
    ///
    /// The whole image is replaced: positions past the end of `values` are
    /// blanked. Values beyond the digit count are dropped. If any value that
    /// would be shown is above 9, nothing is changed.
    pub fn write_bcd(&mut self, values: &[u8]) -> Result<(), ScreenError> {
        let count = values.len().min(self.digits as usize);
        let mut images = [0; MAX_DIGITS];

        for (image, &value) in images.iter_mut().zip(&values[..count]) {
            *image = match digit_image(value, self.nine) {
                Some(segments) => segments,
                None => {
                    warning!("screen: rejected BCD digit {}", value);
                    return Err(ScreenError::InvalidDigit(value));
                }
            };
        }

        self.images = images;
        Ok(())
    }

    /// Light the next digit position
    ///
    /// Must be called at a fixed rate. The digit lines are switched off
    /// before the shared segment lines change, and only then is the new
    /// position enabled; any other order ghosts the previous image onto the
    /// next position.
    pub fn refresh(&mut self) {
        self.driver.digits_all_off();

        self.current_digit = (self.current_digit + 1) % self.digits;

        // Blink phases move once per frame
        if self.current_digit == 0 {
            self.digit_blink.advance();
            self.point_blink.advance();
        }

        let digit = self.current_digit;
        let mut segments = self.images[digit as usize];

        // Digit blanking only applies while flashing is configured
        if let Some(range) = self.digit_flash() {
            if range.contains(digit) && !self.digit_blink.visible() {
                segments = 0;
            }
        }

        match self.points[digit as usize] {
            PointState::On => segments |= SEGMENT_P,
            PointState::Flashing if self.point_blink.visible() => segments |= SEGMENT_P,
            _ => {}
        }

        self.driver.segments_update(segments);
        self.driver.digit_enable(digit);
    }

    /// Blank positions `from..=to` during the second half of every period
    ///
    /// The period is `2 * divisor` frames: `divisor` frames shown, then
    /// `divisor` frames dark. A divisor of 0 stops digit flashing. The range
    /// is checked against [`MAX_DIGITS`], not the configured digit count.
    pub fn flash_digits(&mut self, from: u8, to: u8, divisor: u16) -> Result<(), ScreenError> {
        if from > to || from as usize >= MAX_DIGITS || to as usize >= MAX_DIGITS {
            warning!("screen: rejected flash range {}..={}", from, to);
            return Err(ScreenError::InvalidFlashRange { from, to });
        }

        self.flash_from = from;
        self.flash_to = to;
        self.digit_blink = Blink::from_divisor(divisor as u32);

        debug!(
            "screen: flash digits {}..={} every {} frames",
            from,
            to,
            self.digit_blink.period
        );
        Ok(())
    }

    /// Stop digit flashing, keeping the point configuration
    pub fn stop_digit_flash(&mut self) {
        self.digit_blink = Blink::default();
    }

    /// Light the decimal point of a position steadily
    ///
    /// Ignored when `digit` is past the digit count.
    pub fn set_point(&mut self, digit: u8) {
        if let Some(point) = self.point_slot(digit) {
            *point = PointState::On;
        }
    }

    /// Turn the decimal point of a position off
    ///
    /// Ignored when `digit` is past the digit count.
    pub fn clear_point(&mut self, digit: u8) {
        if let Some(point) = self.point_slot(digit) {
            *point = PointState::Off;
        }
    }

    /// Flash the decimal point of a position
    ///
    /// All flashing points share one period of `2 * divisor` frames; the
    /// latest call sets it for every flashing point. The shared phase
    /// restarts only when the period changes. A divisor of 0 leaves flashing
    /// points dark. Ignored when `digit` is past the digit count.
    pub fn flash_point(&mut self, digit: u8, divisor: u8) {
        let Some(point) = self.point_slot(digit) else {
            return;
        };
        *point = PointState::Flashing;

        let blink = Blink::from_divisor(divisor as u32);
        if blink.period != self.point_blink.period {
            debug!("screen: point flash every {} frames", blink.period);
            self.point_blink = blink;
        }
    }

    fn point_slot(&mut self, digit: u8) -> Option<&mut PointState> {
        if digit < self.digits {
            self.points.get_mut(digit as usize)
        } else {
            None
        }
    }
}
