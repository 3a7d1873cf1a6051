use crate::Handler;

impl<T: 'static, E: 'static> Handler<T, E> {
    /// Adapter for steps that hand back a disposable resource alongside their
    /// values.
    ///
    /// On success the releaser is registered as a finalize hook, so the
    /// resource is released exactly once when the chain settles, however
    /// many steps run in between. The remaining values then go to
    /// `continuation` as with [`next`](Self::next).
    ///
    /// A failed step is assumed to have acquired nothing: its error settles
    /// the handler and no releaser is registered.
    pub fn consume<R, A, F>(&self, continuation: F) -> impl FnOnce(Result<(R, A), E>) + 'static
    where
        R: FnOnce() + 'static,
        A: 'static,
        F: FnOnce(A) + 'static,
    {
        let handler = self.clone();
        move |result| {
            if handler.is_finalized() {
                return;
            }
            let step = handler.next(continuation);
            match result {
                Ok((release, values)) => {
                    handler.on_finalize(release);
                    step(Ok(values));
                }
                Err(err) => step(Err(err)),
            }
        }
    }
}
