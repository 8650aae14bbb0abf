// Example: window a large fixed-height list and scroll a row into view.
use listwindow::{Align, ListWindow, ViewportState, WindowOptions};

fn main() {
    let mut v = ListWindow::new(WindowOptions::new(100_000, 50).with_overscan(6));
    v.set_viewport(ViewportState::new(123_450, 500));

    let mut rows = Vec::new();
    v.collect_rows(&mut rows);
    println!("total_size={}", v.total_size());
    println!("window={:?}", v.window());
    println!("rendered_rows={}", rows.len());
    println!("first_row={:?}", rows.first());

    let off = v.scroll_to_index(99_999, Align::End);
    println!("after scroll_to_index: offset={off} window={:?}", v.window());
}
