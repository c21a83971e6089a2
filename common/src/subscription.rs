use anyhow::Result;
use tracing::debug;

// a scroll handler: called once per native scroll event, with no arguments, since
// everything it needs is read back out of the layout
pub type ScrollHandler = Box<dyn FnMut()>;

/// Something that emits scroll events.
///
/// In the browser this is the window; in tests it is driven by hand.
pub trait ScrollSource {
    type Handle;

    fn subscribe(&self, handler: ScrollHandler) -> Result<Self::Handle>;

    fn unsubscribe(&self, handle: Self::Handle);
}

// a live registration with a scroll source
//
// the listener is removed when this is dropped, so every way out of the owning component
// (normal unmount, a parent being torn down, a panic unwinding through it) releases it
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn new(source: S, handler: ScrollHandler) -> Result<Self> {
        let handle = source.subscribe(handler)?;

        debug!("subscribed to scroll events");
        Ok(ScrollSubscription {
            source,
            handle: Some(handle),
        })
    }

    // release early; calling this more than once is harmless
    pub fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
            debug!("unsubscribed from scroll events");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use api::Section;

    use super::*;
    use crate::state::UiState;
    use crate::tracker::testing::*;

    // a hand-cranked scroll source
    #[derive(Clone, Default)]
    struct ManualSource {
        handlers: Rc<RefCell<Vec<(usize, ScrollHandler)>>>,
        next_id: Rc<RefCell<usize>>,
    }

    impl ManualSource {
        fn emit(&self) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler();
            }
        }

        fn listeners(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl ScrollSource for ManualSource {
        type Handle = usize;

        fn subscribe(&self, handler: ScrollHandler) -> Result<usize> {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id += 1;

            self.handlers.borrow_mut().push((id, handler));
            Ok(id)
        }

        fn unsubscribe(&self, handle: usize) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != handle);
        }
    }

    struct FailingSource;

    impl ScrollSource for FailingSource {
        type Handle = ();

        fn subscribe(&self, _handler: ScrollHandler) -> Result<()> {
            anyhow::bail!("no window")
        }

        fn unsubscribe(&self, _handle: ()) {
            unreachable!("never subscribed")
        }
    }

    // wires a subscription to a shared UiState and a shared layout, the same shape the
    // webapp uses
    fn tracked(
        source: &ManualSource,
    ) -> (
        ScrollSubscription<ManualSource>,
        Rc<RefCell<UiState>>,
        Rc<RefCell<FixedLayout>>,
    ) {
        let state = Rc::new(RefCell::new(UiState::default()));
        let layout = Rc::new(RefCell::new(portfolio()));

        let handler = {
            let state = state.clone();
            let layout = layout.clone();
            Box::new(move || {
                state.borrow_mut().on_scroll(&*layout.borrow());
            })
        };

        let subscription = ScrollSubscription::new(source.clone(), handler).unwrap();
        (subscription, state, layout)
    }

    #[test]
    fn events_drive_state_while_subscribed() {
        let source = ManualSource::default();
        let (_subscription, state, layout) = tracked(&source);
        assert_eq!(source.listeners(), 1);

        layout.borrow_mut().scroll = 1800.0;
        source.emit();
        assert_eq!(state.borrow().active(), Section::Projects);

        layout.borrow_mut().scroll = 3000.0;
        source.emit();
        assert_eq!(state.borrow().active(), Section::Cv);
    }

    #[test]
    fn drop_removes_the_listener() {
        let source = ManualSource::default();
        let (subscription, state, layout) = tracked(&source);
        assert_eq!(source.listeners(), 1);

        drop(subscription);
        assert_eq!(source.listeners(), 0);

        layout.borrow_mut().scroll = 3000.0;
        source.emit();
        assert_eq!(state.borrow().active(), Section::Home);
    }

    #[test]
    fn dispose_is_idempotent() {
        let source = ManualSource::default();
        let (mut subscription, state, layout) = tracked(&source);

        subscription.dispose();
        subscription.dispose();
        assert_eq!(source.listeners(), 0);

        layout.borrow_mut().scroll = 1000.0;
        source.emit();
        assert_eq!(state.borrow().active(), Section::Home);

        // and the eventual drop does not unsubscribe a second time
        drop(subscription);
    }

    #[test]
    fn remounting_does_not_leak_handlers() {
        let source = ManualSource::default();

        for _ in 0..3 {
            let (_subscription, _, _) = tracked(&source);
            assert_eq!(source.listeners(), 1);
        }

        assert_eq!(source.listeners(), 0);
    }

    #[test]
    fn panicking_owner_still_releases() {
        let source = ManualSource::default();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let (_subscription, _, _) = tracked(&source);
            panic!("component blew up");
        }));

        assert!(result.is_err());
        assert_eq!(source.listeners(), 0);
    }

    #[test]
    fn failed_subscribe_is_an_error() {
        let result = ScrollSubscription::new(FailingSource, Box::new(|| {}));
        assert!(result.is_err());
    }
}
