//! Call-rate limiters driven by an explicit clock.
//!
//! Nothing here owns a timer. Callers pass the current time (milliseconds,
//! the same scale as `performance.now()`) and the web frontend arms a single
//! timeout for [`Debounce::deadline`]. Tests drive the clock by hand.

/// Milliseconds since an arbitrary origin.
pub type Millis = f64;

/// Trailing-edge debounce: only the last call inside a quiet window fires.
#[derive(Debug, Clone)]
pub struct Debounce<A> {
    wait: Millis,
    pending: Option<(Millis, A)>,
}

impl<A> Debounce<A> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait: wait_ms as Millis,
            pending: None,
        }
    }

    /// Record a call. Any earlier pending call is replaced and the quiet
    /// window restarts from `now`.
    pub fn call(&mut self, now: Millis, args: A) {
        self.pending = Some((now + self.wait, args));
    }

    /// When the pending call becomes due, if any.
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|(at, _)| *at)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending arguments once their deadline has passed.
    pub fn poll(&mut self, now: Millis) -> Option<A> {
        match self.pending {
            Some((at, _)) if now >= at => self.pending.take().map(|(_, args)| args),
            _ => None,
        }
    }

    /// Drop the pending call without firing it.
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|(_, args)| args)
    }
}

/// Leading-edge fixed-window throttle.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Millis,
    window_end: Option<Millis>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit: limit_ms as Millis,
            window_end: None,
        }
    }

    /// Returns true when the call should go through. A passing call opens a
    /// new window during which every other call is refused.
    pub fn try_call(&mut self, now: Millis) -> bool {
        if self.window_end.is_some_and(|end| now < end) {
            return false;
        }
        self.window_end = Some(now + self.limit);
        true
    }
}

/// A function wrapped in a [`Debounce`].
pub struct Debounced<A, F: FnMut(A)> {
    inner: Debounce<A>,
    func: F,
}

impl<A, F: FnMut(A)> Debounced<A, F> {
    pub fn new(func: F, wait_ms: u32) -> Self {
        Self {
            inner: Debounce::new(wait_ms),
            func,
        }
    }

    pub fn call(&mut self, now: Millis, args: A) {
        self.inner.call(now, args);
    }

    pub fn deadline(&self) -> Option<Millis> {
        self.inner.deadline()
    }

    /// Invoke the function if the pending call is due. Returns whether it ran.
    pub fn tick(&mut self, now: Millis) -> bool {
        match self.inner.poll(now) {
            Some(args) => {
                (self.func)(args);
                true
            }
            None => false,
        }
    }
}

/// A function wrapped in a [`Throttle`].
pub struct Throttled<A, F: FnMut(A)> {
    inner: Throttle,
    func: F,
    _args: std::marker::PhantomData<fn(A)>,
}

impl<A, F: FnMut(A)> Throttled<A, F> {
    pub fn new(func: F, limit_ms: u32) -> Self {
        Self {
            inner: Throttle::new(limit_ms),
            func,
            _args: std::marker::PhantomData,
        }
    }

    /// Invoke immediately unless inside the current window. Returns whether it ran.
    pub fn call(&mut self, now: Millis, args: A) -> bool {
        if self.inner.try_call(now) {
            (self.func)(args);
            true
        } else {
            false
        }
    }
}
