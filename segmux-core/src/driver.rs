//! Hardware driver trait for multiplexed displays

/// Trait for the pin-level side of a multiplexed display
///
/// The segment lines are shared by every digit position and only one
/// digit-enable line may be active at a time. [`Screen::refresh`] is the only
/// caller, and always in the order: all digits off, segments, one digit on.
///
/// Implementations must not block: `refresh` usually runs in a timer
/// interrupt.
///
/// [`Screen::refresh`]: crate::Screen::refresh
pub trait ScreenDriver {
    /// Deassert every digit-enable line
    fn digits_all_off(&mut self);

    /// Drive the shared segment lines to exactly `mask`
    ///
    /// Bits 0-6 are segments A-G, bit 7 is the decimal point.
    fn segments_update(&mut self, mask: u8);

    /// Assert the digit-enable line for `index` only
    fn digit_enable(&mut self, index: u8);
}

// Lets a screen borrow a driver owned elsewhere
impl<T: ScreenDriver + ?Sized> ScreenDriver for &mut T {
    fn digits_all_off(&mut self) {
        (**self).digits_all_off();
    }

    fn segments_update(&mut self, mask: u8) {
        (**self).segments_update(mask);
    }

    fn digit_enable(&mut self, index: u8) {
        (**self).digit_enable(index);
    }
}

/// Driver built from three callbacks
///
/// Useful when the board layer already exposes the operations as plain
/// functions:
///
/// ```ignore
/// let driver = FnDriver::new(board_digits_off, board_write_segments, board_digit_on);
/// let mut screen = Screen::new(4, driver);
/// ```
pub struct FnDriver<A, S, E> {
    all_off: A,
    segments: S,
    enable: E,
}

impl<A, S, E> FnDriver<A, S, E>
where
    A: FnMut(),
    S: FnMut(u8),
    E: FnMut(u8),
{
    /// Create a driver from the digits-off, segments and digit-on callbacks
    pub fn new(all_off: A, segments: S, enable: E) -> Self {
        Self {
            all_off,
            segments,
            enable,
        }
    }
}

impl<A, S, E> ScreenDriver for FnDriver<A, S, E>
where
    A: FnMut(),
    S: FnMut(u8),
    E: FnMut(u8),
{
    fn digits_all_off(&mut self) {
        (self.all_off)();
    }

    fn segments_update(&mut self, mask: u8) {
        (self.segments)(mask);
    }

    fn digit_enable(&mut self, index: u8) {
        (self.enable)(index);
    }
}
