//! # Errback: Finalize-Once Callback Chains
//!
//! Compose a sequence of error-first asynchronous steps into one logical
//! operation whose terminal callback fires exactly once, no matter how many
//! steps run, fail, or race to finish.
//!
//! ## Core Type
//!
//! - **[`Handler<T, E>`]**: owns the terminal callback, tracks whether the chain
//!   has settled, and runs finalize hooks just before settling
//!
//! ## Adapters
//!
//! Each adapter is a plain `FnOnce(Result<A, E>)` closure that can be handed
//! to any operation expecting an error-first completion callback:
//!
//! - [`next(f)`](Handler::next) - continue with `f` on success, settle on error
//! - [`next_if(p, f)`](Handler::next_if) - continue only if `p` holds, otherwise settle successfully
//! - [`flatten(f)`](Handler::flatten) - like `next`, spreading a sequence result
//! - [`consume(f)`](Handler::consume) - like `next`, releasing a resource at settlement
//! - [`last()`](Handler::last) - forward the outcome verbatim to the handler
//!
//! Once the handler has settled, every adapter becomes a no-op.
//!
//! ## Example
//!
//! ```
//! use errback::prelude::*;
//! use std::{cell::RefCell, rc::Rc};
//!
//! fn load(id: u32, done: impl FnOnce(Result<String, String>)) {
//!     done(Ok(format!("user-{id}")));
//! }
//!
//! fn lookup(name: String, done: impl FnOnce(Result<usize, String>)) {
//!     done(Ok(name.len()));
//! }
//!
//! let result = Rc::new(RefCell::new(None));
//! let handler = Handler::new({
//!     let result = Rc::clone(&result);
//!     move |outcome: Result<usize, String>| *result.borrow_mut() = Some(outcome)
//! });
//!
//! let last = handler.last();
//! load(7, handler.next(move |name| lookup(name, last)));
//!
//! assert_eq!(*result.borrow(), Some(Ok(6)));
//! ```

mod combinators;
mod error;
mod handler;
pub mod prelude;

pub use combinators::*;
pub use error::*;
pub use handler::*;
