use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use futures::StreamExt;
use tracing::error;

use common::{UiState, subscription::ScrollSubscription};

use crate::shared::dom::{DomLayout, WindowScroll, smooth_scroll_to};

// a scroll event happened; the receiver reads everything else from the layout
#[derive(Clone, Copy, Debug)]
struct ScrollPulse;

// keep the navigation highlight in sync with the scroll position for as long as the calling
// component is mounted
//
// the window listener runs outside of the dioxus runtime, so it only forwards a pulse; the
// state is read and written from the coroutine, and only when the section actually changes
pub fn use_section_tracker(mut ui: Signal<UiState>) {
    let pulses = use_coroutine(move |mut rx: UnboundedReceiver<ScrollPulse>| async move {
        while rx.next().await.is_some() {
            let mut state = *ui.peek();
            if state.on_scroll(&DomLayout) {
                ui.set(state);
            }
        }
    });

    let subscription = use_hook(move || {
        let tx = pulses.tx();
        let handler = Box::new(move || {
            // the receiver is gone once the component unmounts, and so is the listener
            let _ = tx.unbounded_send(ScrollPulse);
        });

        let subscription = match ScrollSubscription::new(WindowScroll, handler) {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                error!("scroll tracking disabled: {err:#}");
                None
            }
        };

        Rc::new(RefCell::new(subscription))
    });

    // a section picked from another route was not rendered at the time; now it is
    //
    // peek keeps this from subscribing, so it runs once after mount
    use_effect(move || {
        if ui.peek().pending_scroll.is_none() {
            return;
        }

        let target = ui.write().take_pending_scroll(&DomLayout);
        if let Some(top) = target {
            smooth_scroll_to(top);
        }
    });

    use_drop(move || {
        if let Some(mut subscription) = subscription.borrow_mut().take() {
            subscription.dispose();
        }
    });
}
