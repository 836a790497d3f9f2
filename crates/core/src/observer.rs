/// Receives solver events and optionally returns a control action.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, as is `()`,
/// which ignores every event.
pub trait Observer<E, A> {
    /// Observes an event, returning `Some(action)` to steer the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
