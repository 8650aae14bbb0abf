use listwindow::{FrameState, ListWindow, NavKey, Navigator, WindowOptions};

use crate::{
    FocusOutcome, FocusSink, RenderedList, ScrollHost, TrackingMode, ViewportTracker,
    deliver_focus, render,
};

/// A framework-neutral controller that owns a mounted list: viewport tracking, the window
/// engine and keyboard focus.
///
/// This type does not hold any UI objects beyond the host handle. Adapters drive it by calling:
/// - `sync()` once per frame (or after host notifications) to pull the latest viewport
/// - `handle_key` on key presses
/// - `render` to materialize the current window
///
/// Dropping the controller (or calling `unmount`) releases the host observers.
pub struct ListController<H: ScrollHost> {
    tracker: ViewportTracker<H>,
    window: ListWindow,
    nav: Navigator,
}

impl<H: ScrollHost> ListController<H> {
    /// Mounts on `host`. If observers cannot be installed, the list renders unwindowed.
    pub fn mount(host: H, options: WindowOptions) -> Self {
        let tracker = ViewportTracker::mount(host);
        let mut window = ListWindow::new(options);
        window.batch_update(|w| {
            w.set_viewport(tracker.viewport());
            if tracker.mode() == TrackingMode::Unwindowed {
                w.set_enabled(false);
            }
        });
        tracker.take_dirty();
        Self {
            tracker,
            window,
            nav: Navigator::new(),
        }
    }

    pub fn tracker(&self) -> &ViewportTracker<H> {
        &self.tracker
    }

    pub fn window(&self) -> &ListWindow {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut ListWindow {
        &mut self.window
    }

    pub fn mode(&self) -> TrackingMode {
        self.tracker.mode()
    }

    pub fn focus(&self) -> Option<usize> {
        self.nav.focus()
    }

    /// Pulls the tracker's viewport into the window. Returns `true` if it changed.
    ///
    /// Without observers the host is polled here instead.
    pub fn sync(&mut self) -> bool {
        if self.tracker.mode() == TrackingMode::Unwindowed {
            self.tracker.poll_host();
        }
        if !self.tracker.take_dirty() {
            return false;
        }
        self.window.set_viewport(self.tracker.viewport());
        true
    }

    /// Updates the item count, keeping focus inside the list.
    pub fn set_count(&mut self, count: usize) {
        self.window.set_count(count);
        self.nav.clamp_to(count);
    }

    /// Moves focus to `index` (clamped) without scrolling.
    pub fn set_focus(&mut self, index: usize) {
        self.nav.set_focus(index, self.window.count());
    }

    /// Applies a navigation key: moves focus, scrolls the row into view if needed, then
    /// focuses its focusable descendant (or the row itself).
    ///
    /// Returns `None` for an empty list.
    pub fn handle_key(&mut self, key: NavKey, sink: &mut impl FocusSink) -> Option<FocusOutcome> {
        self.sync();
        let index = self.nav.apply(
            key,
            self.window.count(),
            self.window.viewport_height(),
            self.window.item_height(),
        )?;

        let scrolled_to = self.window.ensure_visible(index);
        if let Some(offset) = scrolled_to {
            self.tracker.scroll_host_to(offset);
            self.tracker.take_dirty();
        }
        debug_assert!(
            self.window.window().is_some_and(|w| w.contains(index)),
            "focused row must be materialized"
        );

        let target = deliver_focus(sink, index);
        vdebug!(?key, index, ?target, ?scrolled_to, "handle_key");
        Some(FocusOutcome {
            index,
            target,
            scrolled_to,
        })
    }

    /// Like [`Self::handle_key`], for a DOM `KeyboardEvent.key` name. Other keys are ignored.
    pub fn handle_key_name(
        &mut self,
        name: &str,
        sink: &mut impl FocusSink,
    ) -> Option<FocusOutcome> {
        let key = NavKey::from_key_name(name)?;
        self.handle_key(key, sink)
    }

    pub fn render<T, R>(
        &self,
        items: &[T],
        render_item: impl FnMut(&T, usize) -> R,
    ) -> RenderedList<R> {
        render(items, &self.window, self.nav.focus(), render_item)
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.window.viewport(),
            focus: self.nav.focus(),
        }
    }

    /// Restores a captured frame: scrolls the host and re-applies focus.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        let scroll_top = self.window.clamp_scroll_offset(frame.viewport.scroll_top);
        self.window.set_scroll_top(scroll_top);
        self.tracker.scroll_host_to(scroll_top);
        self.tracker.take_dirty();
        match frame.focus {
            Some(i) => self.nav.set_focus(i, self.window.count()),
            None => self.nav.clear(),
        }
    }

    /// Releases the host observers. The controller keeps answering queries afterwards.
    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }
}
