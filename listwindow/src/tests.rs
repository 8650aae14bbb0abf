use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

// Reference model written with signed arithmetic, straight from the window formulas.
fn expected_window(
    scroll_top: u64,
    viewport_height: u32,
    item_height: u32,
    count: usize,
    overscan: usize,
) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }
    let h = item_height.max(1) as i128;
    let first = scroll_top as i128 / h;
    let start = (first - overscan as i128).max(0).min(count as i128 - 1);
    let visible = (viewport_height as i128 + h - 1) / h + 2 * overscan as i128;
    let end = (start + visible).min(count as i128 - 1);
    Some((start as usize, end as usize))
}

#[test]
fn window_at_top_of_list() {
    let w = compute_window(0, 640, 64, 1000, 6).unwrap();
    assert_eq!(w.start_index, 0);
    assert_eq!(w.end_index, 22);
    assert_eq!(w.offset_y, 0);
}

#[test]
fn window_after_scrolling_to_row_100() {
    let w = compute_window(6400, 640, 64, 1000, 6).unwrap();
    assert_eq!(w.start_index, 94);
    assert_eq!(w.end_index, 116);
    assert_eq!(w.offset_y, 94 * 64);
}

#[test]
fn empty_list_has_no_window() {
    assert_eq!(compute_window(0, 640, 64, 0, 6), None);
    assert_eq!(compute_window(10_000, 0, 0, 0, 0), None);

    let w = ListWindow::new(WindowOptions::new(0, 64).with_enabled(false));
    assert_eq!(w.window(), None);
}

#[test]
fn zero_item_height_is_treated_as_one() {
    assert_eq!(compute_window(5, 3, 0, 100, 0), compute_window(5, 3, 1, 100, 0));
    let w = compute_window(5, 3, 0, 100, 0).unwrap();
    assert_eq!(w.start_index, 5);
    assert_eq!(w.end_index, 8);
    assert_eq!(calc::total_size(100, 0), 100);
}

#[test]
fn window_stays_small_for_huge_lists() {
    let w = compute_window(2_500_000, 500, 50, 100_000, 6).unwrap();
    let bound = calc::visible_count(500, 50, 6) + 1;
    assert!(w.row_count() <= bound, "{} rows > {bound}", w.row_count());
    assert_eq!(w.row_count(), 23);
}

#[test]
fn window_near_end_is_clamped_to_last_row() {
    let w = compute_window(64 * 995, 640, 64, 1000, 6).unwrap();
    assert_eq!(w.start_index, 989);
    assert_eq!(w.end_index, 999);
}

#[test]
fn scroll_past_content_pins_start_to_last_row() {
    let w = compute_window(1_000_000, 640, 64, 10, 2).unwrap();
    assert_eq!(w.start_index, 9);
    assert_eq!(w.end_index, 9);
    assert_eq!(w.offset_y, 9 * 64);
}

#[test]
fn randomized_windows_match_reference_model() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..5000 {
        let count = rng.gen_range_usize(0, 5000);
        let item_height = rng.gen_range_u32(0, 120);
        let viewport_height = rng.gen_range_u32(0, 2000);
        let overscan = rng.gen_range_usize(0, 12);
        let total = count as u64 * item_height.max(1) as u64;
        let scroll_top = rng.gen_range_u64(0, total + 2000);

        let got = compute_window(scroll_top, viewport_height, item_height, count, overscan);
        let want = expected_window(scroll_top, viewport_height, item_height, count, overscan);
        assert_eq!(
            got.map(|w| (w.start_index, w.end_index)),
            want,
            "scroll_top={scroll_top} vh={viewport_height} h={item_height} n={count} os={overscan}"
        );

        if let Some(w) = got {
            assert!(w.start_index <= w.end_index);
            assert!(w.end_index < count);
            assert_eq!(w.offset_y, w.start_index as u64 * item_height.max(1) as u64);
            let bound = calc::visible_count(viewport_height, item_height, overscan) + 1;
            assert!(w.row_count() <= bound);
        }
    }
}

#[test]
fn start_index_never_decreases_while_scrolling_down() {
    let mut rng = Lcg::new(42);
    let mut scroll_top = 0u64;
    let mut prev_start = 0usize;
    for _ in 0..2000 {
        scroll_top += rng.gen_range_u64(0, 300);
        let w = compute_window(scroll_top, 480, 24, 3000, 4).unwrap();
        assert!(w.start_index >= prev_start);
        prev_start = w.start_index;
    }
}

#[test]
fn identical_inputs_give_identical_windows() {
    let a = compute_window(12_345, 777, 31, 4096, 3);
    let b = compute_window(12_345, 777, 31, 4096, 3);
    assert_eq!(a, b);
}

#[test]
fn page_step_has_floor_of_one_row() {
    assert_eq!(calc::page_step(640, 64), 9);
    // Shorter than two rows: the plain formula gives 0.
    assert_eq!(calc::page_step(64, 64), 1);
    assert_eq!(calc::page_step(127, 64), 1);
    assert_eq!(calc::page_step(100, 64), 1);
    assert_eq!(calc::page_step(10, 64), 1);
    assert_eq!(calc::page_step(0, 0), 1);
}

#[test]
fn list_window_tracks_viewport() {
    let mut v = ListWindow::new(WindowOptions::new(1000, 64));
    assert_eq!(v.overscan(), DEFAULT_OVERSCAN);
    v.set_viewport(ViewportState::new(6400, 640));
    let w = v.window().unwrap();
    assert_eq!((w.start_index, w.end_index), (94, 116));

    v.set_overscan(0);
    let w = v.window().unwrap();
    assert_eq!((w.start_index, w.end_index), (100, 110));

    assert_eq!(v.total_size(), 64_000);
    assert_eq!(v.max_scroll_offset(), 64_000 - 640);
}

#[test]
fn disabled_window_spans_whole_list() {
    let mut v = ListWindow::new(WindowOptions::new(50, 20).with_enabled(false));
    v.set_viewport(ViewportState::new(400, 100));
    let w = v.window().unwrap();
    assert_eq!((w.start_index, w.end_index, w.offset_y), (0, 49, 0));

    let mut rows = Vec::new();
    v.collect_rows(&mut rows);
    assert_eq!(rows.len(), 50);

    v.set_enabled(true);
    v.collect_rows(&mut rows);
    assert!(rows.len() < 50);
}

#[test]
fn rows_are_positioned_at_their_true_offset() {
    let mut v = ListWindow::new(WindowOptions::new(100, 10).with_overscan(1));
    v.set_viewport(ViewportState::new(205, 30));

    let mut rows = Vec::new();
    v.collect_rows(&mut rows);
    let w = v.window().unwrap();
    assert_eq!(rows.len(), w.row_count());
    assert_eq!(rows[0].index, w.start_index);
    assert_eq!(rows[0].top, w.offset_y);
    for row in &rows {
        assert_eq!(row.top, row.index as u64 * 10);
        assert_eq!(row.height, 10);
    }
}

#[test]
fn index_at_offset_is_clamped() {
    let v = ListWindow::new(WindowOptions::new(10, 8));
    assert_eq!(v.index_at_offset(0), Some(0));
    assert_eq!(v.index_at_offset(17), Some(2));
    assert_eq!(v.index_at_offset(10_000), Some(9));

    let empty = ListWindow::new(WindowOptions::new(0, 8));
    assert_eq!(empty.index_at_offset(0), None);
}

#[test]
fn scroll_to_index_alignments() {
    let mut v = ListWindow::new(WindowOptions::new(100, 10));
    v.set_viewport(ViewportState::new(0, 50));

    assert_eq!(v.scroll_to_index_offset(20, Align::Start), 200);
    assert_eq!(v.scroll_to_index_offset(20, Align::End), 160);
    assert_eq!(v.scroll_to_index_offset(20, Align::Center), 180);
    // Clamped to max scroll offset.
    assert_eq!(v.scroll_to_index_offset(99, Align::Start), 950);
    assert_eq!(v.scroll_to_index_offset(1000, Align::Start), 950);

    // Already visible: Auto keeps the current offset.
    v.set_scroll_top(100);
    assert_eq!(v.scroll_to_index_offset(12, Align::Auto), 100);
    // Above: align to start. Below: align to end.
    assert_eq!(v.scroll_to_index_offset(3, Align::Auto), 30);
    assert_eq!(v.scroll_to_index_offset(30, Align::Auto), 260);

    assert_eq!(v.scroll_to_index(40, Align::Start), 400);
    assert_eq!(v.scroll_top(), 400);
}

#[test]
fn ensure_visible_only_scrolls_when_needed() {
    let mut v = ListWindow::new(WindowOptions::new(50, 10).with_overscan(0));
    v.set_viewport(ViewportState::new(0, 40));

    assert_eq!(v.ensure_visible(2), None);
    assert_eq!(v.ensure_visible(49), Some(460));
    assert!(v.is_row_visible(49));
    assert!(v.window().unwrap().contains(49));

    assert_eq!(v.ensure_visible(0), Some(0));
    assert!(v.window().unwrap().contains(0));
}

#[test]
fn ensure_visible_keeps_target_inside_window() {
    let mut rng = Lcg::new(7);
    for _ in 0..2000 {
        let count = rng.gen_range_usize(1, 400);
        let item_height = rng.gen_range_u32(1, 40);
        let viewport_height = rng.gen_range_u32(0, 400);
        let overscan = rng.gen_range_usize(0, 4);
        let mut v = ListWindow::new(WindowOptions::new(count, item_height).with_overscan(overscan));
        let scroll_top = rng.gen_range_u64(0, v.total_size() + 1);
        v.set_viewport(ViewportState::new(scroll_top, viewport_height));

        let target = rng.gen_range_usize(0, count);
        v.ensure_visible(target);
        assert!(
            v.window().unwrap().contains(target),
            "target={target} window={:?}",
            v.window()
        );
    }
}

#[test]
fn on_change_fires_once_per_batch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut v = ListWindow::new(WindowOptions::new(100, 10).with_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &ListWindow| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    })));

    v.set_scroll_top(10);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    // No-op updates do not notify.
    v.set_scroll_top(10);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    v.batch_update(|v| {
        v.set_scroll_top(50);
        v.set_viewport_height(120);
        v.set_count(200);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn on_change_sees_updated_window() {
    let seen = Arc::new(AtomicUsize::new(usize::MAX));
    let mut v = ListWindow::new(WindowOptions::new(1000, 64));
    v.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |v: &ListWindow| {
            if let Some(w) = v.window() {
                seen.store(w.start_index, Ordering::Relaxed);
            }
        }
    }));
    v.set_viewport(ViewportState::new(6400, 640));
    assert_eq!(seen.load(Ordering::Relaxed), 94);
}

#[test]
fn update_options_applies_multiple_fields() {
    let mut v = ListWindow::new(WindowOptions::new(10, 10));
    v.update_options(|o| {
        o.count = 20;
        o.overscan = 0;
        o.item_height = 5;
    });
    assert_eq!(v.count(), 20);
    assert_eq!(v.overscan(), 0);
    assert_eq!(v.total_size(), 100);
}

#[test]
fn row_fit_flags_overflowing_content() {
    let v = ListWindow::new(WindowOptions::new(10, 64));
    assert_eq!(v.check_row_fit(0, 64), RowFit::Fits);
    assert_eq!(v.check_row_fit(0, 12), RowFit::Fits);
    assert_eq!(v.check_row_fit(3, 80), RowFit::Overflows { by: 16 });
}

#[test]
fn key_names_map_to_nav_keys() {
    assert_eq!(NavKey::from_key_name("ArrowDown"), Some(NavKey::ArrowDown));
    assert_eq!(NavKey::from_key_name("Up"), Some(NavKey::ArrowUp));
    assert_eq!(NavKey::from_key_name("Home"), Some(NavKey::Home));
    assert_eq!(NavKey::from_key_name("End"), Some(NavKey::End));
    assert_eq!(NavKey::from_key_name("PageUp"), Some(NavKey::PageUp));
    assert_eq!(NavKey::from_key_name("PageDown"), Some(NavKey::PageDown));
    assert_eq!(NavKey::from_key_name("Enter"), None);
    assert_eq!(NavKey::from_key_name("arrowdown"), None);
}

#[test]
fn next_index_transitions() {
    let n = 50;
    assert_eq!(next_index(NavKey::ArrowDown, 3, n, 640, 64), Some(4));
    assert_eq!(next_index(NavKey::ArrowDown, 49, n, 640, 64), Some(49));
    assert_eq!(next_index(NavKey::ArrowUp, 3, n, 640, 64), Some(2));
    assert_eq!(next_index(NavKey::ArrowUp, 0, n, 640, 64), Some(0));
    assert_eq!(next_index(NavKey::Home, 30, n, 640, 64), Some(0));
    assert_eq!(next_index(NavKey::End, 0, n, 640, 64), Some(49));
    // floor(640 / 64 - 1) = 9
    assert_eq!(next_index(NavKey::PageDown, 0, n, 640, 64), Some(9));
    assert_eq!(next_index(NavKey::PageDown, 45, n, 640, 64), Some(49));
    assert_eq!(next_index(NavKey::PageUp, 20, n, 640, 64), Some(11));
    assert_eq!(next_index(NavKey::PageUp, 5, n, 640, 64), Some(0));
    // Out-of-range focus is treated as the last row.
    assert_eq!(next_index(NavKey::ArrowUp, 500, n, 640, 64), Some(48));
    assert_eq!(next_index(NavKey::End, 0, 0, 640, 64), None);
}

#[test]
fn page_keys_move_on_tiny_viewports() {
    assert_eq!(next_index(NavKey::PageDown, 0, 10, 32, 64), Some(1));
    assert_eq!(next_index(NavKey::PageUp, 5, 10, 32, 64), Some(4));
}

#[test]
fn navigator_starts_unfocused() {
    let mut nav = Navigator::new();
    assert_eq!(nav.focus(), None);
    assert_eq!(nav.apply(NavKey::ArrowDown, 10, 100, 10), Some(0));
    assert_eq!(nav.apply(NavKey::ArrowDown, 10, 100, 10), Some(1));

    let mut nav = Navigator::new();
    assert_eq!(nav.apply(NavKey::End, 50, 100, 10), Some(49));
    assert_eq!(nav.focus(), Some(49));
}

#[test]
fn navigator_clamps_when_list_shrinks() {
    let mut nav = Navigator::new();
    nav.set_focus(40, 50);
    nav.clamp_to(10);
    assert_eq!(nav.focus(), Some(9));
    nav.clamp_to(0);
    assert_eq!(nav.focus(), None);

    nav.set_focus(3, 0);
    assert_eq!(nav.focus(), None);
    assert_eq!(nav.apply(NavKey::ArrowDown, 0, 100, 10), None);
}

#[test]
fn navigator_stays_in_bounds() {
    let keys = [
        NavKey::ArrowUp,
        NavKey::ArrowDown,
        NavKey::Home,
        NavKey::End,
        NavKey::PageUp,
        NavKey::PageDown,
    ];
    let mut rng = Lcg::new(99);
    let mut nav = Navigator::new();
    for _ in 0..5000 {
        let key = keys[rng.gen_range_usize(0, keys.len())];
        let next = nav.apply(key, 37, 200, 16).unwrap();
        assert!(next < 37);
    }
}

#[test]
fn viewport_from_raw_sanitizes_host_values() {
    assert_eq!(ViewportState::from_raw(120.7, 480.2), ViewportState::new(120, 480));
    assert_eq!(ViewportState::from_raw(-15.0, -1.0), ViewportState::new(0, 0));
    assert_eq!(ViewportState::from_raw(f64::NAN, f64::INFINITY), ViewportState::new(0, 0));
}
