//! Adapter utilities for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and focuses on the window math and focus state. This
//! crate provides the framework-neutral pieces an adapter needs to mount a windowed list:
//!
//! - Viewport tracking over a [`ScrollHost`], with observers released on teardown
//! - Rendering the windowed rows with list/listitem semantics
//! - Keyboard focus delivery with a row-container fallback
//!
//! Everything here runs on the UI thread; shared state uses `Rc`/`Cell`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod focus;
mod render;
mod tracker;


pub use controller::ListController;
pub use error::{ObserveError, ObserveKind};
pub use focus::{FocusOutcome, FocusSink, FocusTarget, deliver_focus};
pub use render::{ROLE_LIST, ROLE_LISTITEM, RenderedList, RenderedRow, render};
pub use tracker::{
    HostEvent, Listener, ScrollHost, SubscriptionId, TrackingMode, ViewportTracker,
};
