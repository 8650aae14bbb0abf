// Example: drive the navigator with DOM key names and keep the focused row visible.
use listwindow::{ListWindow, NavKey, Navigator, ViewportState, WindowOptions};

fn main() {
    let mut v = ListWindow::new(WindowOptions::new(50, 64).with_overscan(2));
    v.set_viewport(ViewportState::new(0, 320));
    let mut nav = Navigator::new();

    for name in ["ArrowDown", "PageDown", "PageDown", "End", "ArrowUp", "Home", "Tab"] {
        let Some(key) = NavKey::from_key_name(name) else {
            println!("{name:>9}: ignored");
            continue;
        };
        let Some(index) = nav.apply(key, v.count(), v.viewport_height(), v.item_height()) else {
            continue;
        };
        let scrolled = v.ensure_visible(index);
        println!(
            "{name:>9}: focus={index} scrolled_to={scrolled:?} window={:?}",
            v.window()
        );
    }
}
