//! Fixed-height list windowing.
//!
//! Rendering tens of thousands of rows is wasteful when only a screenful is visible. This crate
//! computes which contiguous slice of a uniformly sized list should be materialized for a given
//! scroll position, with overscan on both edges, and provides the keyboard navigation state
//! machine that goes with such a list.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport height
//! - scroll offset
//! - key presses
//!
//! For viewport tracking, row rendering and focus delivery, see the `listwindow-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod calc;
mod nav;
mod options;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use calc::compute_window;
pub use nav::{NavKey, Navigator, next_index};
pub use options::{DEFAULT_OVERSCAN, OnChangeCallback, WindowOptions};
pub use state::{FrameState, ViewportState};
pub use types::{Align, RowFit, RowPlacement, Window};
pub use window::ListWindow;
