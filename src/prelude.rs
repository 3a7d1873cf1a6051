//! Commonly used imports
//!
//! Use `use errback::prelude::*;` for quick access to the handler and its
//! supporting types.

pub use crate::{AlreadyFinalized, Handler, Spread};
