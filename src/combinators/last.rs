use crate::Handler;

impl<T: 'static, E: 'static> Handler<T, E> {
    /// Terminal adapter: whatever the final step reports becomes the
    /// handler's outcome verbatim.
    pub fn last(&self) -> impl FnOnce(Result<T, E>) + 'static {
        let handler = self.clone();
        move |outcome| handler.finalize(outcome)
    }
}
