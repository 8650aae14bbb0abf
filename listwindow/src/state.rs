/// Scroll position and height of the scrollable container.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_top: u64,
    pub height: u32,
}

impl ViewportState {
    pub fn new(scroll_top: u64, height: u32) -> Self {
        Self { scroll_top, height }
    }

    /// Builds a viewport from host-reported floating point values.
    ///
    /// Negative, NaN and infinite values become 0; fractions are truncated.
    pub fn from_raw(scroll_top: f64, height: f64) -> Self {
        Self {
            scroll_top: sanitize_u64(scroll_top),
            height: sanitize_u32(height),
        }
    }
}

pub(crate) fn sanitize_u64(v: f64) -> u64 {
    if v.is_finite() { v as u64 } else { 0 }
}

pub(crate) fn sanitize_u32(v: f64) -> u32 {
    if v.is_finite() { v as u32 } else { 0 }
}

/// A combined snapshot of viewport + keyboard focus.
///
/// This is useful for restoring a list across navigations without coupling the window to any
/// specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub focus: Option<usize>,
}
