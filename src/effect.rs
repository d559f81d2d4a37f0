/// A deferred computation. Building an [`Effect`] performs no work; the
/// wrapped computation runs when the owner calls [`Effect::run`], which
/// consumes the effect so it can execute at most once.
pub struct Effect<A> {
    thunk: Box<dyn FnOnce() -> A + Send>,
}

impl<A: 'static> Effect<A> {
    /// Suspend a computation without running it.
    pub fn defer<F>(f: F) -> Effect<A>
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Effect { thunk: Box::new(f) }
    }

    /// Lift an already-computed value.
    pub fn pure(value: A) -> Effect<A>
    where
        A: Send,
    {
        Effect::defer(move || value)
    }

    /// Execute the computation. This is the only place work happens.
    pub fn run(self) -> A {
        (self.thunk)()
    }

    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Effect::defer(move || f(self.run()))
    }

    /// Sequence another effect after this one.
    pub fn and_then<B, F>(self, f: F) -> Effect<B>
    where
        B: 'static,
        F: FnOnce(A) -> Effect<B> + Send + 'static,
    {
        Effect::defer(move || f(self.run()).run())
    }
}
