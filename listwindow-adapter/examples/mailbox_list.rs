// Example: mount a windowed mailbox list on a simulated scroll container.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use listwindow::WindowOptions;
use listwindow_adapter::{
    FocusSink, HostEvent, ListController, Listener, ObserveError, ObserveKind, ScrollHost,
    SubscriptionId,
};

#[derive(Clone, Default)]
struct SimHost {
    scroll_top: Rc<Cell<f64>>,
    height: Rc<Cell<f64>>,
    listeners: Rc<RefCell<Vec<(SubscriptionId, ObserveKind, Listener)>>>,
}

impl SimHost {
    fn user_scroll(&self, scroll_top: f64) {
        self.scroll_top.set(scroll_top);
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == ObserveKind::Scroll)
            .map(|(_, _, l)| Rc::clone(l))
            .collect();
        for l in listeners {
            l(HostEvent::Scrolled { scroll_top });
        }
    }
}

impl ScrollHost for SimHost {
    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn client_height(&self) -> f64 {
        self.height.get()
    }

    fn set_scroll_top(&self, scroll_top: u64) {
        self.scroll_top.set(scroll_top as f64);
    }

    fn subscribe(
        &self,
        kind: ObserveKind,
        listener: Listener,
    ) -> Result<SubscriptionId, ObserveError> {
        let mut listeners = self.listeners.borrow_mut();
        let id = SubscriptionId(listeners.len() as u64);
        listeners.push((id, kind, listener));
        Ok(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(i, _, _)| *i != id);
    }
}

struct PrintSink;

impl FocusSink for PrintSink {
    fn focus_descendant(&mut self, index: usize) -> bool {
        // Every third row has an "open" button.
        let has_button = index % 3 == 0;
        if has_button {
            println!("  focus button in row {index}");
        }
        has_button
    }

    fn focus_row(&mut self, index: usize) {
        println!("  focus row {index}");
    }
}

fn main() {
    let mailboxes: Vec<String> = (0..10_000).map(|i| format!("PO Box {i:05}")).collect();

    let host = SimHost::default();
    host.height.set(480.0);
    let mut ctl = ListController::mount(host.clone(), WindowOptions::new(mailboxes.len(), 48));

    let list = ctl.render(&mailboxes, |name, _| name.clone());
    println!(
        "rendered {} of {} rows, spacer={}px",
        list.rows.len(),
        mailboxes.len(),
        list.total_height
    );

    host.user_scroll(48_000.0);
    ctl.sync();
    println!("after scroll: window={:?}", ctl.window().window());

    for name in ["ArrowDown", "PageDown", "End"] {
        println!("{name}:");
        if let Some(out) = ctl.handle_key_name(name, &mut PrintSink) {
            println!("  -> {out:?}");
        }
    }

    ctl.unmount();
    println!("listeners after unmount: {}", host.listeners.borrow().len());
}
