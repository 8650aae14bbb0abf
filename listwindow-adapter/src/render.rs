use alloc::vec::Vec;

use listwindow::ListWindow;

pub const ROLE_LIST: &str = "list";
pub const ROLE_LISTITEM: &str = "listitem";

/// A materialized row, absolutely positioned inside the full-height spacer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedRow<R> {
    pub index: usize,
    pub top: u64,
    pub height: u32,
    pub role: &'static str,
    /// `aria-posinset` (1-based).
    pub pos_in_set: usize,
    /// `aria-setsize`.
    pub set_size: usize,
    /// Roving tabindex: 0 on the focused row when it is rendered, otherwise on the first
    /// rendered row; -1 elsewhere.
    pub tab_index: i32,
    pub content: R,
}

/// The scroll container's content: a spacer of `total_height` and the windowed rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RenderedList<R> {
    pub role: &'static str,
    pub total_height: u64,
    /// `false` when every row is materialized (unwindowed fallback).
    pub windowed: bool,
    pub rows: Vec<RenderedRow<R>>,
}

impl<R> RenderedList<R> {
    pub fn row(&self, index: usize) -> Option<&RenderedRow<R>> {
        self.rows.iter().find(|r| r.index == index)
    }
}

/// Materializes the rows of `window`'s current range.
///
/// `items` should hold `window.count()` records; rows without a backing item are skipped.
pub fn render<T, R>(
    items: &[T],
    window: &ListWindow,
    focused: Option<usize>,
    mut render_item: impl FnMut(&T, usize) -> R,
) -> RenderedList<R> {
    if items.len() != window.count() {
        vwarn!(
            items = items.len(),
            count = window.count(),
            "item slice and window count disagree"
        );
    }
    let set_size = window.count().min(items.len());
    let range = window.window();
    let mut rows = Vec::with_capacity(range.map_or(0, |w| w.row_count()));

    // A focused row scrolled out of the window must not take the tab stop with it.
    let tab_stop = focused
        .filter(|&i| i < set_size && range.is_some_and(|w| w.contains(i)))
        .or_else(|| range.map(|w| w.start_index));

    window.for_each_row(|placement| {
        let Some(item) = items.get(placement.index) else {
            return;
        };
        rows.push(RenderedRow {
            index: placement.index,
            top: placement.top,
            height: placement.height,
            role: ROLE_LISTITEM,
            pos_in_set: placement.index + 1,
            set_size,
            tab_index: if tab_stop == Some(placement.index) { 0 } else { -1 },
            content: render_item(item, placement.index),
        });
    });

    vtrace!(
        rendered = rows.len(),
        set_size,
        windowed = window.enabled(),
        "render"
    );

    RenderedList {
        role: ROLE_LIST,
        total_height: window.total_size(),
        windowed: window.enabled(),
        rows,
    }
}
