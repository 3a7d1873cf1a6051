use std::collections::VecDeque;

use crate::Handler;

/// A step result that can be spread into individual values.
///
/// Sequences spread into their elements. Values that are not a sequence
/// spread into nothing, so a continuation behind [`Handler::flatten`] runs
/// with an empty argument list instead of failing.
pub trait Spread {
    type Item;

    fn spread(self) -> Vec<Self::Item>;
}

impl<T> Spread for Vec<T> {
    type Item = T;

    fn spread(self) -> Vec<T> {
        self
    }
}

impl<T, const N: usize> Spread for [T; N] {
    type Item = T;

    fn spread(self) -> Vec<T> {
        self.into()
    }
}

impl<T> Spread for VecDeque<T> {
    type Item = T;

    fn spread(self) -> Vec<T> {
        self.into()
    }
}

impl<S: Spread> Spread for Option<S> {
    type Item = S::Item;

    fn spread(self) -> Vec<S::Item> {
        self.map(Spread::spread).unwrap_or_default()
    }
}

#[cfg(feature = "json")]
impl Spread for serde_json::Value {
    type Item = serde_json::Value;

    fn spread(self) -> Vec<serde_json::Value> {
        match self {
            serde_json::Value::Array(items) => items,
            _ => Vec::new(),
        }
    }
}

impl<T: 'static, E: 'static> Handler<T, E> {
    /// Like [`next`](Self::next), but spreads the step's result into
    /// individual values before calling `continuation`.
    ///
    /// ```rust
    /// use errback::Handler;
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// let handler: Handler<(), String> = Handler::new(|_| {});
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    ///
    /// handler.flatten({
    ///     let seen = Rc::clone(&seen);
    ///     move |items| *seen.borrow_mut() = items
    /// })(Ok(vec![1, 2, 3]));
    ///
    /// assert_eq!(*seen.borrow(), [1, 2, 3]);
    /// ```
    pub fn flatten<S, F>(&self, continuation: F) -> impl FnOnce(Result<S, E>) + 'static
    where
        S: Spread + 'static,
        F: FnOnce(Vec<S::Item>) + 'static,
    {
        self.next(move |values: S| continuation(values.spread()))
    }
}
