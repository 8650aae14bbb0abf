use alloc::sync::Arc;

use crate::window::ListWindow;

/// Overscan used by [`WindowOptions::new`].
pub const DEFAULT_OVERSCAN: usize = 6;

/// A callback fired after the window state changes.
pub type OnChangeCallback = Arc<dyn Fn(&ListWindow) + Send + Sync>;

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: the callback lives in an `Arc`, so adapters can tweak a field and call
/// `ListWindow::set_options` without reallocating closures.
pub struct WindowOptions {
    pub count: usize,
    /// Uniform row height. Zero is treated as 1.
    pub item_height: u32,
    /// Extra rows rendered beyond each viewport edge.
    pub overscan: usize,
    /// When disabled, the window spans the whole list (unwindowed fallback).
    pub enabled: bool,
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            item_height: self.item_height,
            overscan: self.overscan,
            enabled: self.enabled,
            on_change: self.on_change.clone(),
        }
    }
}

impl WindowOptions {
    pub fn new(count: usize, item_height: u32) -> Self {
        Self {
            count,
            item_height,
            overscan: DEFAULT_OVERSCAN,
            enabled: true,
            on_change: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListWindow) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("item_height", &self.item_height)
            .field("overscan", &self.overscan)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
