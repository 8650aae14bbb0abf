/// Moves keyboard focus inside the rendered list.
pub trait FocusSink {
    /// Focuses the first focusable descendant of row `index`.
    ///
    /// Returns `false` when the row has none (or is not rendered).
    fn focus_descendant(&mut self, index: usize) -> bool;

    /// Focuses the row container itself.
    fn focus_row(&mut self, index: usize);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FocusTarget {
    Descendant,
    Row,
}

/// What a navigation key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusOutcome {
    pub index: usize,
    pub target: FocusTarget,
    /// The new scroll offset when the row had to be scrolled into view.
    pub scrolled_to: Option<u64>,
}

/// Focuses row `index`, preferring its focusable descendant.
pub fn deliver_focus(sink: &mut impl FocusSink, index: usize) -> FocusTarget {
    if sink.focus_descendant(index) {
        return FocusTarget::Descendant;
    }
    vtrace!(index, "no focusable descendant; focusing row container");
    sink.focus_row(index);
    FocusTarget::Row
}
