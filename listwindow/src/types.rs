use core::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Scroll only as far as needed to bring the row fully into the viewport.
    Auto,
}

/// The contiguous index range of rows that should be materialized.
///
/// Both bounds are inclusive. An empty list has no window at all, which is why the calculator
/// returns `Option<Window>` instead of an "empty" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // inclusive
    /// Offset of `start_index` from the top of the list (`start_index * item_height`).
    pub offset_y: u64,
}

impl Window {
    /// Number of rows the window materializes.
    pub fn row_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// A materialized row and its absolute position inside the full-height spacer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowPlacement {
    pub index: usize,
    pub top: u64,
    pub height: u32,
}

impl RowPlacement {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}

/// Result of comparing a row's measured content height against the fixed row height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowFit {
    Fits,
    /// Content is taller than the row and gets clipped by `by` units.
    Overflows { by: u32 },
}
