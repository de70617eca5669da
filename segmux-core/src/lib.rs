//! Board-agnostic multiplexing engine for 7-segment LED displays
//!
//! This crate contains everything that does not depend on a specific chip
//! or board:
//!
//! - The [`Screen`] multiplexer (segment image, digit cycling, blinking)
//! - The [`ScreenDriver`] trait the board layer implements
//! - The decimal glyph table and segment bit assignment
//! - Configuration and error types
//! - [`SharedScreen`] for splitting refresh (interrupt) and updates (main flow)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Application (writes, flash) │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐     periodic
//! │  Screen (this crate)         │ ◄── refresh()
//! └──────────────────────────────┘     (timer IRQ)
//!                │ ScreenDriver
//!                ▼
//! ┌──────────────────────────────┐
//! │  segmux-drivers / board code │
//! └──────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

mod log;

pub mod config;
pub mod driver;
pub mod error;
pub mod screen;
pub mod segments;
pub mod shared;

// Re-export key types at crate root for convenience
pub use config::{ScreenConfig, MAX_DIGITS};
pub use driver::{FnDriver, ScreenDriver};
pub use error::ScreenError;
pub use screen::{FlashRange, PointState, Screen};
pub use segments::NineStyle;
pub use shared::SharedScreen;
