//! Shared utility functions for the pressure ulcer site crates.

/// Deferred task scheduling
pub mod schedule {
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Something that can run a task once after a delay, and cancel it
    /// before it fires.
    ///
    /// In the browser this is `setTimeout`/`clearTimeout`; in tests it is
    /// [`ManualScheduler`].
    pub trait Scheduler {
        type Handle;

        /// Run `task` after `delay_ms`. Returns `None` if the task could not
        /// be scheduled (it will never run).
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;

        /// Cancel a task that hasn't fired yet. Cancelling a task that
        /// already ran is a no-op.
        fn cancel(&self, handle: Self::Handle);
    }

    struct Pending {
        id: u64,
        due: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ManualState {
        now: u64,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// A scheduler driven by a virtual clock.
    ///
    /// Nothing runs until [`advance`](ManualScheduler::advance) moves the
    /// clock past a task's due time. Clones share the same clock.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        state: Rc<RefCell<ManualState>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Current virtual time in milliseconds.
        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        /// Number of tasks waiting to fire.
        pub fn pending(&self) -> usize {
            self.state.borrow().pending.len()
        }

        /// Move the clock forward by `ms`, running every task that comes due
        /// in due-time order. Tasks scheduled by a running task are eligible
        /// in the same call if they fall inside the window.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let idx = state
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    idx.map(|i| {
                        let p = state.pending.remove(i);
                        state.now = p.due;
                        p.task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.state.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<u64> {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let due = state.now + u64::from(delay_ms);
            state.pending.push(Pending { id, due, task });
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.state.borrow_mut().pending.retain(|p| p.id != handle);
        }
    }
}

/// Trailing-edge debounce
pub mod debounce {
    use crate::schedule::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Inner<S: Scheduler> {
        scheduler: S,
        delay_ms: u32,
        callback: Box<dyn Fn()>,
        pending: RefCell<Option<S::Handle>>,
    }

    /// A coalesced trigger produced by [`debounce`].
    ///
    /// Each [`trigger`](Debounced::trigger) restarts the quiet period; the
    /// callback runs once, `delay_ms` after the last trigger of a burst.
    /// Dropping every clone cancels a pending call.
    pub struct Debounced<S: Scheduler> {
        inner: Rc<Inner<S>>,
    }

    impl<S: Scheduler> Clone for Debounced<S> {
        fn clone(&self) -> Self {
            Self {
                inner: Rc::clone(&self.inner),
            }
        }
    }

    impl<S: Scheduler + 'static> Debounced<S> {
        pub fn trigger(&self) {
            if let Some(handle) = self.inner.pending.borrow_mut().take() {
                self.inner.scheduler.cancel(handle);
            }
            let weak = Rc::downgrade(&self.inner);
            let handle = self.inner.scheduler.schedule(
                self.inner.delay_ms,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.pending.borrow_mut().take();
                        (inner.callback)();
                    }
                }),
            );
            if handle.is_none() {
                log::warn!("debounce: scheduler refused a {}ms task", self.inner.delay_ms);
            }
            *self.inner.pending.borrow_mut() = handle;
        }

        /// Whether a call is waiting for the quiet period to end.
        pub fn is_pending(&self) -> bool {
            self.inner.pending.borrow().is_some()
        }
    }

    /// Wrap `callback` so bursts of triggers collapse into one trailing call.
    pub fn debounce<S, F>(scheduler: S, delay_ms: u32, callback: F) -> Debounced<S>
    where
        S: Scheduler + 'static,
        F: Fn() + 'static,
    {
        Debounced {
            inner: Rc::new(Inner {
                scheduler,
                delay_ms,
                callback: Box::new(callback),
                pending: RefCell::new(None),
            }),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::debounce;
        use crate::schedule::ManualScheduler;
        use std::cell::Cell;
        use std::rc::Rc;

        fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
            let calls = Rc::new(Cell::new(0));
            let c = Rc::clone(&calls);
            (calls, move || c.set(c.get() + 1))
        }

        #[test]
        fn test_burst_collapses_to_one_trailing_call() {
            let clock = ManualScheduler::new();
            let (calls, cb) = counter();
            let resize = debounce(clock.clone(), 250, cb);

            resize.trigger();
            clock.advance(100);
            resize.trigger();
            clock.advance(100);
            resize.trigger();

            clock.advance(249);
            assert_eq!(calls.get(), 0);
            assert!(resize.is_pending());

            clock.advance(1);
            assert_eq!(calls.get(), 1);
            assert!(!resize.is_pending());
            assert_eq!(clock.pending(), 0);
        }

        #[test]
        fn test_separate_bursts_each_fire() {
            let clock = ManualScheduler::new();
            let (calls, cb) = counter();
            let resize = debounce(clock.clone(), 250, cb);

            resize.trigger();
            clock.advance(300);
            resize.trigger();
            resize.trigger();
            clock.advance(300);
            assert_eq!(calls.get(), 2);
        }

        #[test]
        fn test_drop_cancels_pending_call() {
            let clock = ManualScheduler::new();
            let (calls, cb) = counter();
            let resize = debounce(clock.clone(), 250, cb);
            resize.trigger();
            drop(resize);
            clock.advance(1000);
            assert_eq!(calls.get(), 0);
        }

        #[test]
        fn test_clones_share_the_quiet_period() {
            let clock = ManualScheduler::new();
            let (calls, cb) = counter();
            let a = debounce(clock.clone(), 50, cb);
            let b = a.clone();
            a.trigger();
            clock.advance(40);
            b.trigger();
            clock.advance(40);
            assert_eq!(calls.get(), 0);
            clock.advance(10);
            assert_eq!(calls.get(), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::schedule::{ManualScheduler, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_manual_scheduler_runs_in_due_order() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, name) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            clock.schedule(delay, Box::new(move || log.borrow_mut().push(name)));
        }
        clock.advance(25);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(clock.now(), 25);
        clock.advance(5);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_manual_scheduler_cancel() {
        let clock = ManualScheduler::new();
        let ran = Rc::new(RefCell::new(false));
        let r = Rc::clone(&ran);
        let handle = clock
            .schedule(10, Box::new(move || *r.borrow_mut() = true))
            .unwrap();
        clock.cancel(handle);
        clock.advance(100);
        assert!(!*ran.borrow());
    }
}
