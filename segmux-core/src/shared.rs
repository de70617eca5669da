//! Screen shared between the refresh interrupt and the main flow
//!
//! `refresh` runs from a periodic timer interrupt while writes and flash
//! configuration come from the main loop. [`SharedScreen`] keeps the screen
//! behind a blocking mutex so both sides go through one critical section:
//!
//! ```ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//!
//! static SCREEN: SharedScreen<CriticalSectionRawMutex, BoardDriver> = SharedScreen::new();
//!
//! // Startup
//! SCREEN.install(Screen::new(4, driver)).ok();
//!
//! // Timer interrupt
//! SCREEN.refresh();
//!
//! // Main loop
//! SCREEN.with(|screen| screen.write_bcd(&[1, 2, 3, 4]));
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::driver::ScreenDriver;
use crate::screen::Screen;

/// Screen slot guarded by a blocking mutex
///
/// With `CriticalSectionRawMutex` it can live in a `static` and be reached
/// from interrupt handlers. Nested access (for example a refresh raised while
/// the main flow is inside [`SharedScreen::with`] on the same context) is
/// refused instead of panicking.
pub struct SharedScreen<R: RawMutex, D> {
    inner: Mutex<R, RefCell<Option<Screen<D>>>>,
}

impl<R: RawMutex, D: ScreenDriver> Default for SharedScreen<R, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RawMutex, D: ScreenDriver> SharedScreen<R, D> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Place a screen in the slot
    ///
    /// Returns the screen previously installed, if any. Hands `screen` back
    /// as the error when the slot is currently borrowed.
    pub fn install(&self, screen: Screen<D>) -> Result<Option<Screen<D>>, Screen<D>> {
        self.inner.lock(|cell| match cell.try_borrow_mut() {
            Ok(mut slot) => Ok(slot.replace(screen)),
            Err(_) => Err(screen),
        })
    }

    /// Remove the screen from the slot
    pub fn take(&self) -> Option<Screen<D>> {
        self.inner
            .lock(|cell| cell.try_borrow_mut().ok().and_then(|mut slot| slot.take()))
    }

    /// Check if a screen is installed
    pub fn is_installed(&self) -> bool {
        self.inner
            .lock(|cell| cell.try_borrow().map(|slot| slot.is_some()).unwrap_or(true))
    }

    /// Run one multiplex step
    ///
    /// Returns false when no screen is installed or the screen is already in
    /// use; the tick is dropped in that case.
    pub fn refresh(&self) -> bool {
        self.with(|screen| screen.refresh()).is_some()
    }

    /// Run `f` with exclusive access to the screen
    ///
    /// Returns `None` when no screen is installed or the screen is already
    /// in use.
    pub fn with<T>(&self, f: impl FnOnce(&mut Screen<D>) -> T) -> Option<T> {
        self.inner.lock(|cell| {
            let mut slot = cell.try_borrow_mut().ok()?;
            slot.as_mut().map(f)
        })
    }
}
