use crate::Handler;

impl<T: 'static, E: 'static> Handler<T, E> {
    /// Continue the chain with `continuation` when a step succeeds.
    ///
    /// The returned adapter settles the handler with the error if the step
    /// fails, and otherwise passes the step's values on to `continuation`.
    /// It does nothing once the handler is finalized.
    ///
    /// ```rust
    /// use errback::Handler;
    /// use std::{cell::Cell, rc::Rc};
    ///
    /// let handler: Handler<(), &str> = Handler::new(|_| {});
    /// let sum = Rc::new(Cell::new(0));
    ///
    /// let step = handler.next({
    ///     let sum = Rc::clone(&sum);
    ///     move |(a, b, c): (i32, i32, i32)| sum.set(a + b + c)
    /// });
    /// step(Ok((1, 2, 3)));
    ///
    /// assert_eq!(sum.get(), 6);
    /// ```
    pub fn next<A, F>(&self, continuation: F) -> impl FnOnce(Result<A, E>) + 'static
    where
        A: 'static,
        F: FnOnce(A) + 'static,
    {
        let handler = self.clone();
        move |result| {
            if handler.is_finalized() {
                return;
            }
            match result {
                Ok(values) => continuation(values),
                Err(err) => handler.error(err),
            }
        }
    }

    /// Like [`next`](Self::next), but only continues if `predicate` accepts
    /// the step's values.
    ///
    /// A rejected result is not a failure: the chain is considered complete
    /// and the handler settles successfully with those values.
    pub fn next_if<A, P, F>(
        &self,
        predicate: P,
        continuation: F,
    ) -> impl FnOnce(Result<A, E>) + 'static
    where
        A: Into<T> + 'static,
        P: FnOnce(&A) -> bool + 'static,
        F: FnOnce(A) + 'static,
    {
        let handler = self.clone();
        move |result| {
            if handler.is_finalized() {
                return;
            }
            match result {
                Ok(values) => {
                    if predicate(&values) {
                        continuation(values)
                    } else {
                        handler.success(values.into())
                    }
                }
                Err(err) => handler.error(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::recorder;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_next_forwards_values_without_error_slot() {
        let (handler, outcomes) = recorder::<(), &str>();
        let seen = Rc::new(RefCell::new(None));

        handler.next({
            let seen = Rc::clone(&seen);
            move |values: (u8, u8, u8)| *seen.borrow_mut() = Some(values)
        })(Ok((1, 2, 3)));

        assert_eq!(*seen.borrow(), Some((1, 2, 3)));
        assert!(outcomes.borrow().is_empty());
        assert!(!handler.is_finalized());
    }

    #[test]
    fn test_next_settles_with_error() {
        let (handler, outcomes) = recorder::<(), &str>();
        let called = Rc::new(RefCell::new(false));

        handler.next({
            let called = Rc::clone(&called);
            move |_: (u8, u8, u8)| *called.borrow_mut() = true
        })(Err("Fail"));

        assert!(!*called.borrow());
        assert_eq!(&*outcomes.borrow(), &[Err("Fail")]);
    }

    #[test]
    fn test_next_is_noop_after_finalize() {
        let (handler, outcomes) = recorder::<(), &str>();
        let called = Rc::new(RefCell::new(false));
        let step = handler.next({
            let called = Rc::clone(&called);
            move |_: ()| *called.borrow_mut() = true
        });
        let failing = handler.next(|_: ()| {});

        handler.error("first");
        step(Ok(()));
        failing(Err("second"));

        assert!(!*called.borrow());
        assert_eq!(&*outcomes.borrow(), &[Err("first")]);
    }

    #[test]
    fn test_next_if_continues_when_predicate_holds() {
        let (handler, outcomes) = recorder::<(u8, u8, u8), &str>();
        let seen = Rc::new(RefCell::new(None));

        handler.next_if(|_| true, {
            let seen = Rc::clone(&seen);
            move |values: (u8, u8, u8)| *seen.borrow_mut() = Some(values)
        })(Ok((1, 2, 3)));

        assert_eq!(*seen.borrow(), Some((1, 2, 3)));
        assert!(outcomes.borrow().is_empty());
    }

    #[test]
    fn test_next_if_settles_successfully_when_predicate_fails() {
        let (handler, outcomes) = recorder::<(u8, u8, u8), &str>();
        let called = Rc::new(RefCell::new(false));

        handler.next_if(|&(a, _, _): &(u8, u8, u8)| a > 5, {
            let called = Rc::clone(&called);
            move |_| *called.borrow_mut() = true
        })(Ok((1, 2, 3)));

        assert!(!*called.borrow());
        assert_eq!(&*outcomes.borrow(), &[Ok((1, 2, 3))]);
    }

    #[test]
    fn test_next_if_converts_rejected_values() {
        let (handler, outcomes) = recorder::<Option<u32>, &str>();
        handler.next_if(|n: &u32| *n == 0, |_| {})(Ok(42));
        assert_eq!(&*outcomes.borrow(), &[Ok(Some(42))]);
    }

    #[test]
    fn test_next_if_propagates_error_before_predicate() {
        let (handler, outcomes) = recorder::<u8, &str>();
        let asked = Rc::new(RefCell::new(false));

        handler.next_if(
            {
                let asked = Rc::clone(&asked);
                move |_: &u8| {
                    *asked.borrow_mut() = true;
                    true
                }
            },
            |_| {},
        )(Err("Fail"));

        assert!(!*asked.borrow());
        assert_eq!(&*outcomes.borrow(), &[Err("Fail")]);
    }
}
