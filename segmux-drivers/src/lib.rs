//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the
//! [`ScreenDriver`](segmux_core::ScreenDriver) trait defined in segmux-core:
//!
//! - Direct pin drive over `embedded-hal` digital outputs (common cathode,
//!   common anode, or any mix of active-high/active-low lines)

#![no_std]
#![deny(unsafe_code)]

pub mod pins;

pub use pins::{PinDriver, Polarity, SEGMENT_LINES};
