//! Pure window arithmetic for fixed-height rows.
//!
//! Every function here is deterministic and O(1). Malformed inputs are clamped instead of
//! rejected: a zero `item_height` is treated as 1.

use crate::Window;

/// Replaces a zero row height with 1.
pub const fn sanitize_item_height(item_height: u32) -> u32 {
    if item_height == 0 { 1 } else { item_height }
}

/// Rows covering the viewport plus overscan on both edges:
/// `ceil(viewport_height / item_height) + 2 * overscan`.
pub fn visible_count(viewport_height: u32, item_height: u32, overscan: usize) -> usize {
    let item_height = sanitize_item_height(item_height);
    let rows = viewport_height.div_ceil(item_height) as usize;
    rows.saturating_add(overscan.saturating_mul(2))
}

/// Offset of row `index` from the top of the list.
pub fn row_offset(index: usize, item_height: u32) -> u64 {
    (index as u64).saturating_mul(sanitize_item_height(item_height) as u64)
}

/// Height of the full-list spacer element.
pub fn total_size(item_count: usize, item_height: u32) -> u64 {
    row_offset(item_count, item_height)
}

/// Largest scroll offset that still fills the viewport.
pub fn max_scroll_offset(item_count: usize, item_height: u32, viewport_height: u32) -> u64 {
    total_size(item_count, item_height).saturating_sub(viewport_height as u64)
}

/// Rows moved by PageUp/PageDown: `floor(viewport_height / item_height - 1)`.
///
/// For viewports shorter than two rows that formula gives 0 (or goes negative below one row),
/// so the step is clamped to 1 there and paging still moves focus.
pub fn page_step(viewport_height: u32, item_height: u32) -> usize {
    let item_height = sanitize_item_height(item_height);
    ((viewport_height / item_height) as usize)
        .saturating_sub(1)
        .max(1)
}

/// Computes the window of rows to materialize.
///
/// - `start_index = max(0, floor(scroll_top / item_height) - overscan)`
/// - `end_index = min(item_count - 1, start_index + visible_count)`
///
/// Returns `None` for an empty list. A `scroll_top` past the end of the content pins
/// `start_index` to the last row so that `start_index <= end_index` always holds.
pub fn compute_window(
    scroll_top: u64,
    viewport_height: u32,
    item_height: u32,
    item_count: usize,
    overscan: usize,
) -> Option<Window> {
    if item_count == 0 {
        return None;
    }
    let item_height = sanitize_item_height(item_height);
    let last = item_count - 1;

    let first_visible = usize::try_from(scroll_top / item_height as u64).unwrap_or(usize::MAX);
    let start_index = first_visible.saturating_sub(overscan).min(last);
    let end_index = start_index
        .saturating_add(visible_count(viewport_height, item_height, overscan))
        .min(last);

    Some(Window {
        start_index,
        end_index,
        offset_y: row_offset(start_index, item_height),
    })
}

/// The whole list as a single window (used when windowing is unavailable).
pub fn full_window(item_count: usize) -> Option<Window> {
    (item_count > 0).then(|| Window {
        start_index: 0,
        end_index: item_count - 1,
        offset_y: 0,
    })
}
