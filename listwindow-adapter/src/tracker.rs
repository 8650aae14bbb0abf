use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use listwindow::ViewportState;

use crate::{ObserveError, ObserveKind};

/// A host-side notification delivered to a tracker listener.
///
/// Values are raw host numbers; the tracker sanitizes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Scrolled { scroll_top: f64 },
    Resized { height: f64 },
}

/// Callback registered with a [`ScrollHost`].
pub type Listener = Rc<dyn Fn(HostEvent)>;

/// Opaque handle returned by [`ScrollHost::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// The scrollable container a list is mounted in (a DOM element, a terminal pane, ...).
///
/// Methods take `&self`: hosts are handles to UI objects that live on the UI thread.
pub trait ScrollHost {
    fn scroll_top(&self) -> f64;
    fn client_height(&self) -> f64;
    fn set_scroll_top(&self, scroll_top: u64);
    fn subscribe(
        &self,
        kind: ObserveKind,
        listener: Listener,
    ) -> Result<SubscriptionId, ObserveError>;
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Whether the list can be windowed on this host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingMode {
    Windowed,
    /// Observers could not be installed; render every row.
    Unwindowed,
}

#[derive(Default)]
struct Shared {
    viewport: Cell<ViewportState>,
    dirty: Cell<bool>,
}

impl Shared {
    fn apply(&self, event: HostEvent) {
        let mut next = self.viewport.get();
        match event {
            HostEvent::Scrolled { scroll_top } => {
                next.scroll_top = ViewportState::from_raw(scroll_top, 0.0).scroll_top;
            }
            HostEvent::Resized { height } => {
                next.height = ViewportState::from_raw(0.0, height).height;
            }
        }
        if next != self.viewport.get() {
            self.viewport.set(next);
            self.dirty.set(true);
        }
    }
}

/// Observes a host's scroll offset and height.
///
/// The tracker is the single writer of the viewport state. Subscriptions are released by
/// [`ViewportTracker::unmount`] or on drop, whichever comes first.
pub struct ViewportTracker<H: ScrollHost> {
    host: H,
    shared: Rc<Shared>,
    subscriptions: Vec<SubscriptionId>,
    mode: TrackingMode,
    fallback_reason: Option<ObserveError>,
}

impl<H: ScrollHost> ViewportTracker<H> {
    /// Subscribes to scroll and resize notifications and reads the initial geometry.
    ///
    /// Observer setup failures are not fatal: the tracker releases whatever it registered and
    /// switches to [`TrackingMode::Unwindowed`].
    pub fn mount(host: H) -> Self {
        let shared = Rc::new(Shared::default());
        shared.viewport.set(ViewportState::from_raw(
            host.scroll_top(),
            host.client_height(),
        ));

        let mut tracker = Self {
            host,
            shared,
            subscriptions: Vec::with_capacity(2),
            mode: TrackingMode::Windowed,
            fallback_reason: None,
        };

        for kind in [ObserveKind::Scroll, ObserveKind::Resize] {
            let shared = Rc::clone(&tracker.shared);
            let listener: Listener = Rc::new(move |event: HostEvent| shared.apply(event));
            match tracker.host.subscribe(kind, listener) {
                Ok(id) => tracker.subscriptions.push(id),
                Err(err) => {
                    vwarn!(%err, "observer setup failed; rendering the full list");
                    tracker.unsubscribe_all();
                    tracker.mode = TrackingMode::Unwindowed;
                    tracker.fallback_reason = Some(err);
                    break;
                }
            }
        }

        vdebug!(
            mode = ?tracker.mode,
            scroll_top = tracker.viewport().scroll_top,
            height = tracker.viewport().height,
            "ViewportTracker::mount"
        );
        tracker
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// The observer error that forced the unwindowed fallback, if any.
    pub fn fallback_reason(&self) -> Option<&ObserveError> {
        self.fallback_reason.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn viewport(&self) -> ViewportState {
        self.shared.viewport.get()
    }

    /// Returns `true` once after each viewport change.
    pub fn take_dirty(&self) -> bool {
        self.shared.dirty.replace(false)
    }

    /// Reads the host's current offset and height directly.
    ///
    /// Needed when no observers are installed (unwindowed fallback). Marks the tracker dirty
    /// only if either value changed.
    pub fn poll_host(&self) {
        self.shared.apply(HostEvent::Scrolled {
            scroll_top: self.host.scroll_top(),
        });
        self.shared.apply(HostEvent::Resized {
            height: self.host.client_height(),
        });
    }

    /// Scrolls the host and records the new offset without waiting for the host's echo.
    pub fn scroll_host_to(&self, scroll_top: u64) {
        self.host.set_scroll_top(scroll_top);
        self.shared.apply(HostEvent::Scrolled {
            scroll_top: scroll_top as f64,
        });
    }

    /// Releases both observers. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        vdebug!(
            subscriptions = self.subscriptions.len(),
            "ViewportTracker::unmount"
        );
        self.unsubscribe_all();
    }

    fn unsubscribe_all(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.host.unsubscribe(id);
        }
    }
}

impl<H: ScrollHost> Drop for ViewportTracker<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<H: ScrollHost + core::fmt::Debug> core::fmt::Debug for ViewportTracker<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("host", &self.host)
            .field("viewport", &self.viewport())
            .field("subscriptions", &self.subscriptions)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
