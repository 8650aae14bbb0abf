use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::calc;
use crate::{Align, RowFit, RowPlacement, ViewportState, Window, WindowOptions};

/// A fixed-height list windowing engine.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing the viewport geometry (scroll offset + height).
/// - The window is recomputed from scratch on every query; nothing derived is cached.
///
/// For viewport tracking, rendering and focus delivery, see the `listwindow-adapter` crate.
#[derive(Clone, Debug)]
pub struct ListWindow {
    options: WindowOptions,
    viewport: ViewportState,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ListWindow {
    pub fn new(options: WindowOptions) -> Self {
        vdebug!(
            count = options.count,
            item_height = options.item_height,
            overscan = options.overscan,
            enabled = options.enabled,
            "ListWindow::new"
        );
        if options.item_height == 0 {
            vwarn!("item_height of 0 is treated as 1");
        }
        Self {
            options,
            viewport: ViewportState::default(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WindowOptions) {
        self.options = options;
        vtrace!(
            count = self.options.count,
            item_height = self.options.item_height,
            overscan = self.options.overscan,
            enabled = self.options.enabled,
            "ListWindow::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListWindow) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// A scroll and a resize that arrive in the same frame should go through one batch so the
    /// callback (which usually triggers a re-render) fires once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// The effective row height (never 0).
    pub fn item_height(&self) -> u32 {
        calc::sanitize_item_height(self.options.item_height)
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        vdebug!(enabled, "ListWindow::set_enabled");
        self.notify();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.notify();
    }

    pub fn set_item_height(&mut self, item_height: u32) {
        if self.options.item_height == item_height {
            return;
        }
        if item_height == 0 {
            vwarn!("item_height of 0 is treated as 1");
        }
        self.options.item_height = item_height;
        self.notify();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_top(&self) -> u64 {
        self.viewport.scroll_top
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport.height
    }

    pub fn set_viewport(&mut self, viewport: ViewportState) {
        if self.viewport == viewport {
            return;
        }
        vtrace!(
            scroll_top = viewport.scroll_top,
            height = viewport.height,
            "ListWindow::set_viewport"
        );
        self.viewport = viewport;
        self.notify();
    }

    pub fn set_scroll_top(&mut self, scroll_top: u64) {
        if self.viewport.scroll_top == scroll_top {
            return;
        }
        self.viewport.scroll_top = scroll_top;
        self.notify();
    }

    pub fn set_scroll_top_clamped(&mut self, scroll_top: u64) {
        let clamped = self.clamp_scroll_offset(scroll_top);
        self.set_scroll_top(clamped);
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport.height == height {
            return;
        }
        self.viewport.height = height;
        self.notify();
    }

    /// Height of the full-list spacer.
    pub fn total_size(&self) -> u64 {
        calc::total_size(self.options.count, self.options.item_height)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        calc::max_scroll_offset(
            self.options.count,
            self.options.item_height,
            self.viewport.height,
        )
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The window for the current viewport.
    ///
    /// When disabled, the window spans the whole list.
    pub fn window(&self) -> Option<Window> {
        self.window_for(self.viewport)
    }

    pub fn window_for(&self, viewport: ViewportState) -> Option<Window> {
        if !self.options.enabled {
            return calc::full_window(self.options.count);
        }
        calc::compute_window(
            viewport.scroll_top,
            viewport.height,
            self.options.item_height,
            self.options.count,
            self.options.overscan,
        )
    }

    pub fn row(&self, index: usize) -> Option<RowPlacement> {
        (index < self.options.count).then(|| self.placement(index))
    }

    fn placement(&self, index: usize) -> RowPlacement {
        RowPlacement {
            index,
            top: calc::row_offset(index, self.options.item_height),
            height: self.item_height(),
        }
    }

    /// Index of the row covering `offset`, clamped to the last row.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let index = usize::try_from(offset / self.item_height() as u64).unwrap_or(usize::MAX);
        Some(index.min(count - 1))
    }

    pub fn for_each_row(&self, f: impl FnMut(RowPlacement)) {
        self.for_each_row_for(self.viewport, f);
    }

    pub fn for_each_row_for(&self, viewport: ViewportState, mut f: impl FnMut(RowPlacement)) {
        let Some(window) = self.window_for(viewport) else {
            return;
        };
        for i in window.indexes() {
            f(self.placement(i));
        }
    }

    /// Collects the current window's rows into `out` (clears `out` first).
    ///
    /// For maximum performance, prefer `for_each_row` and reuse a scratch buffer.
    pub fn collect_rows(&self, out: &mut Vec<RowPlacement>) {
        out.clear();
        self.for_each_row(|row| out.push(row));
    }

    /// Whether the row lies entirely inside the viewport.
    pub fn is_row_visible(&self, index: usize) -> bool {
        let Some(row) = self.row(index) else {
            return false;
        };
        let top = self.viewport.scroll_top;
        let bottom = top.saturating_add(self.viewport.height as u64);
        row.top >= top && row.bottom() <= bottom
    }

    /// Computes the (clamped) scroll offset that brings `index` into view with `align`.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let row = self.placement(index.min(self.options.count - 1));
        let view = self.viewport.height as u64;

        let target = match align {
            Align::Start => row.top,
            Align::End => row.bottom().saturating_sub(view),
            Align::Center => {
                let center = row.top.saturating_add(row.height as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.viewport.scroll_top;
                let cur_end = cur.saturating_add(view);
                if view == 0 || row.top < cur {
                    row.top
                } else if row.bottom() <= cur_end {
                    cur
                } else {
                    row.bottom().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Scrolls to an index and returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_top(offset);
        offset
    }

    /// Scrolls the minimum distance needed to show `index` in full.
    ///
    /// Returns the new scroll offset, or `None` when no scroll was needed. A fully visible row
    /// is always inside the window, so the caller can focus it right away.
    pub fn ensure_visible(&mut self, index: usize) -> Option<u64> {
        if self.options.count == 0 {
            return None;
        }
        let offset = self.scroll_to_index_offset(index, Align::Auto);
        if offset == self.viewport.scroll_top {
            return None;
        }
        vtrace!(index, from = self.viewport.scroll_top, to = offset, "ensure_visible");
        self.set_scroll_top(offset);
        Some(offset)
    }

    /// Compares a row's measured content height with the fixed row height.
    ///
    /// Rows are never resized. Taller content is clipped, so overflow is reported (and logged)
    /// for the caller to surface.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn check_row_fit(&self, index: usize, measured_height: u32) -> RowFit {
        let item_height = self.item_height();
        if measured_height <= item_height {
            return RowFit::Fits;
        }
        let by = measured_height - item_height;
        vwarn!(
            index,
            measured_height,
            item_height,
            "row content is taller than item_height and will be clipped"
        );
        RowFit::Overflows { by }
    }
}
