use std::fmt;

/// Returned by the checked settlement methods when the handler has already
/// been finalized.
///
/// Carries the outcome that was rejected so the caller can recover it, the
/// same way a one-shot channel hands back a value it could not deliver.
///
/// ```rust
/// use errback::Handler;
///
/// let handler: Handler<u32, String> = Handler::new(|_| {});
/// handler.success(1);
///
/// let rejected = handler.try_success(2).unwrap_err();
/// assert_eq!(rejected.into_inner(), Ok(2));
/// ```
#[derive(thiserror::Error)]
#[error("handler already finalized")]
pub struct AlreadyFinalized<O>(pub O);

impl<O> AlreadyFinalized<O> {
    /// Take back the outcome that was not delivered.
    pub fn into_inner(self) -> O {
        self.0
    }
}

impl<O> fmt::Debug for AlreadyFinalized<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlreadyFinalized").finish_non_exhaustive()
    }
}
