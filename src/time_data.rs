use std::ops::ControlFlow;
use std::sync::Arc;

use crate::calendar::Instant;
use crate::from_instant::FromInstant;
use crate::zone::ZoneId;

/// A pure construction from an `(Instant, ZoneId)` pair to a value.
///
/// `TimeData` values are built once and evaluated any number of times;
/// evaluation never fails, blocks or touches external state. Composition goes
/// through [`map`](TimeData::map) and [`flat_map`](TimeData::flat_map), and
/// every stage of a composed construction observes the one pair the caller
/// passed to [`eval`](TimeData::eval).
pub struct TimeData<A> {
    run: Arc<dyn Fn(Instant, &ZoneId) -> A + Send + Sync>,
}

impl<A> Clone for TimeData<A> {
    fn clone(&self) -> Self {
        TimeData {
            run: self.run.clone(),
        }
    }
}

impl<A: 'static> TimeData<A> {
    /// Wrap an arbitrary pure function of the ambient pair.
    pub fn new<F>(f: F) -> TimeData<A>
    where
        F: Fn(Instant, &ZoneId) -> A + Send + Sync + 'static,
    {
        TimeData { run: Arc::new(f) }
    }

    /// The canonical construction for a catalog type.
    pub fn of() -> TimeData<A>
    where
        A: FromInstant,
    {
        TimeData::new(|instant, zone| A::from_instant(instant, zone))
    }

    /// A constant construction; ignores the instant and the zone.
    pub fn pure(value: A) -> TimeData<A>
    where
        A: Clone + Send + Sync,
    {
        TimeData::new(move |_, _| value.clone())
    }

    pub fn eval(&self, instant: Instant, zone: &ZoneId) -> A {
        (self.run)(instant, zone)
    }

    pub fn map<B, F>(self, f: F) -> TimeData<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        TimeData::new(move |instant, zone| f(self.eval(instant, zone)))
    }

    /// Feed the constructed value into `f` and evaluate the construction it
    /// returns against the same ambient pair. Both levels are guaranteed to
    /// see one consistent `(instant, zone)`.
    pub fn flat_map<B, F>(self, f: F) -> TimeData<B>
    where
        B: 'static,
        F: Fn(A) -> TimeData<B> + Send + Sync + 'static,
    {
        TimeData::new(move |instant, zone| f(self.eval(instant, zone)).eval(instant, zone))
    }

    /// Iterate `f` from `seed` until it yields `ControlFlow::Break`.
    ///
    /// The iteration is a loop over evaluations, not call-stack recursion, so
    /// chains of arbitrary length evaluate in constant stack space.
    pub fn tail_rec<S, F>(seed: S, f: F) -> TimeData<A>
    where
        S: Clone + Send + Sync + 'static,
        F: Fn(S) -> TimeData<ControlFlow<A, S>> + Send + Sync + 'static,
    {
        TimeData::new(move |instant, zone| {
            let mut state = seed.clone();
            loop {
                match f(state).eval(instant, zone) {
                    ControlFlow::Continue(next) => state = next,
                    ControlFlow::Break(done) => return done,
                }
            }
        })
    }
}
