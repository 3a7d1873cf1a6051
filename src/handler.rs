//! The finalize-once state machine behind every callback chain.
//!
//! A [`Handler`] owns one terminal callback and guarantees it is called at
//! most once. Everything else in the crate (the adapters built by
//! [`next`](Handler::next), [`consume`](Handler::consume) and friends)
//! eventually funnels into [`Handler::finalize`].
//!
//! # Lifecycle
//!
//! A handler starts out pending. The first call to `finalize`, `success`,
//! `error`, or any adapter that settles the chain moves it to finalized:
//!
//! 1. the flag flips, so every later settlement attempt is a no-op
//! 2. finalize hooks run in registration order
//! 3. the terminal callback receives the outcome
//!
//! ```rust
//! use errback::Handler;
//! use std::{cell::RefCell, rc::Rc};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let handler: Handler<&str, &str> = Handler::new({
//!     let log = Rc::clone(&log);
//!     move |outcome| log.borrow_mut().push(format!("done: {outcome:?}"))
//! });
//!
//! handler.on_finalize({
//!     let log = Rc::clone(&log);
//!     move || log.borrow_mut().push("hook".to_string())
//! });
//!
//! handler.success("first");
//! handler.error("ignored");
//!
//! assert_eq!(&*log.borrow(), &["hook", "done: Ok(\"first\")"]);
//! ```

use std::{cell::RefCell, fmt, mem, rc::Rc};

use tracing::trace;

use crate::error::AlreadyFinalized;

type Callback<T, E> = Box<dyn FnOnce(Result<T, E>)>;
type Hook = Box<dyn FnOnce()>;

struct State<T, E> {
    callback: Option<Callback<T, E>>,
    hooks: Vec<Hook>,
    finalized: bool,
}

/// Finalize-once aggregator for an error-first callback chain.
///
/// `Handler` is a reference-counted handle; cloning it yields another handle
/// to the same chain. Adapters created from it keep a clone alive until they
/// are dropped.
///
/// The handler is single-threaded. No borrow of its state is held while
/// hooks, continuations, or the terminal callback run, so all of those may
/// call back into the same handler.
pub struct Handler<T, E> {
    state: Rc<RefCell<State<T, E>>>,
}

impl<T: 'static, E: 'static> Handler<T, E> {
    /// Create a pending handler around the chain's terminal callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(Result<T, E>) + 'static,
    {
        Handler {
            state: Rc::new(RefCell::new(State {
                callback: Some(Box::new(callback)),
                hooks: Vec::new(),
                finalized: false,
            })),
        }
    }

    /// Settle the chain with `outcome`.
    ///
    /// Runs the finalize hooks, then hands `outcome` to the terminal callback.
    /// Does nothing if the handler is already finalized.
    pub fn finalize(&self, outcome: Result<T, E>) {
        let _ = self.try_finalize(outcome);
    }

    /// Settle the chain with `outcome`, handing it back if the handler was
    /// already finalized.
    pub fn try_finalize(
        &self,
        outcome: Result<T, E>,
    ) -> Result<(), AlreadyFinalized<Result<T, E>>> {
        let (hooks, callback) = {
            let mut state = self.state.borrow_mut();
            if state.finalized {
                return Err(AlreadyFinalized(outcome));
            }
            state.finalized = true;
            (mem::take(&mut state.hooks), state.callback.take())
        };

        let kind = if outcome.is_ok() { "ok" } else { "err" };
        trace!(outcome = kind, hooks = hooks.len(), "handler finalized");

        for hook in hooks {
            hook();
        }
        if let Some(callback) = callback {
            callback(outcome);
        }
        Ok(())
    }

    /// Settle the chain successfully. Shorthand for `finalize(Ok(value))`.
    pub fn success(&self, value: T) {
        self.finalize(Ok(value));
    }

    pub fn try_success(&self, value: T) -> Result<(), AlreadyFinalized<Result<T, E>>> {
        self.try_finalize(Ok(value))
    }

    /// Settle the chain with an error. Shorthand for `finalize(Err(err))`.
    pub fn error(&self, err: E) {
        self.finalize(Err(err));
    }

    pub fn try_error(&self, err: E) -> Result<(), AlreadyFinalized<Result<T, E>>> {
        self.try_finalize(Err(err))
    }

    /// Register a hook that runs once, at settlement, before the terminal
    /// callback.
    ///
    /// Hooks registered after settlement are dropped without running.
    /// Returns the handler to allow chaining.
    pub fn on_finalize<F>(&self, hook: F) -> &Self
    where
        F: FnOnce() + 'static,
    {
        let mut state = self.state.borrow_mut();
        if !state.finalized {
            state.hooks.push(Box::new(hook));
            trace!(hooks = state.hooks.len(), "finalize hook registered");
        }
        self
    }

    /// Run `f` with this handler, but only while it is still pending.
    pub fn handle<F>(&self, f: F)
    where
        F: FnOnce(&Self),
    {
        if !self.is_finalized() {
            f(self);
        }
    }
}

impl<T, E> Handler<T, E> {
    /// Returns `true` once the chain has settled.
    pub fn is_finalized(&self) -> bool {
        self.state.borrow().finalized
    }
}

impl<T, E> Clone for Handler<T, E> {
    fn clone(&self) -> Self {
        Handler {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T, E> fmt::Debug for Handler<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Handler")
            .field("finalized", &state.finalized)
            .field("hooks", &state.hooks.len())
            .finish()
    }
}
