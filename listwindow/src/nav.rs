use crate::calc::page_step;

/// Keys understood by the list navigator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value (plus the legacy IE/Edge spellings).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            _ => None,
        }
    }
}

/// Computes the focus index after `key` is pressed on row `current`.
///
/// Returns `None` for an empty list. `current` past the end is treated as the last row.
pub fn next_index(
    key: NavKey,
    current: usize,
    count: usize,
    viewport_height: u32,
    item_height: u32,
) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let i = current.min(last);
    let next = match key {
        NavKey::ArrowDown => i.saturating_add(1).min(last),
        NavKey::ArrowUp => i.saturating_sub(1),
        NavKey::Home => 0,
        NavKey::End => last,
        NavKey::PageDown => i
            .saturating_add(page_step(viewport_height, item_height))
            .min(last),
        NavKey::PageUp => i.saturating_sub(page_step(viewport_height, item_height)),
    };
    Some(next)
}

/// Focus state machine over `[0, count - 1]`.
///
/// Before any row has focus, `End` lands on the last row and every other key lands on row 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Navigator {
    focus: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Sets the focused row, clamped to the list. Ignored for an empty list.
    pub fn set_focus(&mut self, index: usize, count: usize) {
        self.focus = (count > 0).then(|| index.min(count - 1));
    }

    pub fn clear(&mut self) {
        self.focus = None;
    }

    /// Re-clamps the focus after the list changed length.
    pub fn clamp_to(&mut self, count: usize) {
        if let Some(i) = self.focus {
            self.set_focus(i, count);
        }
    }

    /// Applies a key press and returns the new focus index.
    pub fn apply(
        &mut self,
        key: NavKey,
        count: usize,
        viewport_height: u32,
        item_height: u32,
    ) -> Option<usize> {
        if count == 0 {
            self.focus = None;
            return None;
        }
        let next = match self.focus {
            Some(current) => next_index(key, current, count, viewport_height, item_height)?,
            None if key == NavKey::End => count - 1,
            None => 0,
        };
        vtrace!(?key, prev = ?self.focus, next, count, "Navigator::apply");
        self.focus = Some(next);
        Some(next)
    }
}
