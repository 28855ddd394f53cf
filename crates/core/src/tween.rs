//! Tween module - per-frame numeric interpolation
//!
//! A [`TweenScheduler`] owns a list of active tweens. Each tween interpolates one
//! property of a [`Tweenable`] target from the value it had when the tween was
//! scheduled to a target value, shaped by an [`Easing`] curve.
//!
//! Properties are a closed, caller-defined key type (`P`), so every mutation is
//! statically checked. Notifications (`E`) are plain values handed to the caller
//! of [`TweenScheduler::advance`] instead of stored callbacks.
//!
//! The scheduler knows nothing about slot machines and does not detect two
//! tweens fighting over the same property.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Easing curves mapping normalized progress `[0, 1]` to eased progress.
///
/// Overshooting curves may return values outside `[0, 1]`, but every curve maps
/// `1.0` to exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Overshoot-then-settle cubic: `(t-1)^2 * ((a+1)(t-1) + a) + 1`.
    BackOut(f64),
}

impl Easing {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Easing::Linear => t,
            Easing::BackOut(amount) => {
                let s = t - 1.0;
                s * s * ((amount + 1.0) * s + amount) + 1.0
            }
        }
    }
}

/// Read/write access to the numeric properties a scheduler animates.
pub trait Tweenable<P> {
    fn value(&self, property: P) -> f64;
    fn set_value(&mut self, property: P, value: f64);
}

/// Identifies a scheduled tween (for cancellation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle(u32);

/// Everything needed to schedule a tween except the begin value and start time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec<P, E> {
    pub property: P,
    pub to: f64,
    pub duration_ms: u32,
    pub easing: Easing,
    pub on_tick: Option<E>,
    pub on_complete: Option<E>,
}

impl<P, E> TweenSpec<P, E> {
    pub fn new(property: P, to: f64, duration_ms: u32, easing: Easing) -> Self {
        Self {
            property,
            to,
            duration_ms,
            easing,
            on_tick: None,
            on_complete: None,
        }
    }

    /// Notify with `event` on every frame the tween writes its property.
    pub fn on_tick(mut self, event: E) -> Self {
        self.on_tick = Some(event);
        self
    }

    /// Notify with `event` once, after the property reaches the target.
    pub fn on_complete(mut self, event: E) -> Self {
        self.on_complete = Some(event);
        self
    }
}

/// A scheduled interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<P, E> {
    handle: TweenHandle,
    property: P,
    /// Captured once at scheduling, never re-read from the target.
    begin: f64,
    target: f64,
    start_ms: u64,
    duration_ms: u32,
    easing: Easing,
    on_tick: Option<E>,
    on_complete: Option<E>,
}

impl<P: Copy, E: Copy> Tween<P, E> {
    pub fn handle(&self) -> TweenHandle {
        self.handle
    }

    pub fn property(&self) -> P {
        self.property
    }

    pub fn begin(&self) -> f64 {
        self.begin
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Clamped normalized progress at `now_ms`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Write the interpolated value for `now_ms` into `target`.
    ///
    /// Returns `true` once progress has reached 1, in which case the property
    /// holds exactly the target value.
    pub fn apply<T: Tweenable<P> + ?Sized>(&self, now_ms: u64, target: &mut T) -> bool {
        let progress = self.progress(now_ms);
        target.set_value(
            self.property,
            lerp(self.begin, self.target, self.easing.apply(progress)),
        );
        if progress >= 1.0 {
            target.set_value(self.property, self.target);
            return true;
        }
        false
    }
}

/// Runs all active tweens once per frame.
#[derive(Debug, Clone)]
pub struct TweenScheduler<P, E> {
    active: Vec<Tween<P, E>>,
    finished: Vec<bool>,
    next_id: u32,
}

impl<P: Copy + PartialEq, E: Copy> TweenScheduler<P, E> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Preallocate so that scheduling up to `capacity` tweens does not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            active: Vec::with_capacity(capacity),
            finished: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Schedule a tween starting at `now_ms`; the begin value is read from
    /// `target` right now.
    pub fn schedule<T: Tweenable<P> + ?Sized>(
        &mut self,
        target: &T,
        now_ms: u64,
        spec: TweenSpec<P, E>,
    ) -> TweenHandle {
        let handle = TweenHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        self.active.push(Tween {
            handle,
            property: spec.property,
            begin: target.value(spec.property),
            target: spec.to,
            start_ms: now_ms,
            duration_ms: spec.duration_ms,
            easing: spec.easing,
            on_tick: spec.on_tick,
            on_complete: spec.on_complete,
        });
        handle
    }

    /// Advance every active tween to `now_ms`, in insertion order.
    ///
    /// Notifications are passed to `notify` in the order they occur. Completed
    /// tweens are removed after the pass.
    pub fn advance<T: Tweenable<P> + ?Sized>(
        &mut self,
        now_ms: u64,
        target: &mut T,
        mut notify: impl FnMut(E),
    ) {
        self.finished.clear();
        for tween in &self.active {
            let done = tween.apply(now_ms, &mut *target);
            if let Some(event) = tween.on_tick {
                notify(event);
            }
            if done {
                if let Some(event) = tween.on_complete {
                    notify(event);
                }
            }
            self.finished.push(done);
        }

        if self.finished.iter().any(|&done| done) {
            let mut i = 0;
            let finished = &self.finished;
            self.active.retain(|_| {
                let keep = !finished[i];
                i += 1;
                keep
            });
        }
    }

    /// Remove a tween without completing it. Returns whether it was active.
    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|t| t.handle != handle);
        self.active.len() != before
    }

    /// Remove every tween animating `property`.
    pub fn cancel_property(&mut self, property: P) -> usize {
        let before = self.active.len();
        self.active.retain(|t| t.property != property);
        before - self.active.len()
    }

    /// Remove every tween without completing it.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.active.iter().any(|t| t.handle == handle)
    }

    pub fn is_animating(&self, property: P) -> bool {
        self.active.iter().any(|t| t.property == property)
    }

    pub fn tweens(&self) -> &[Tween<P, E>] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<P: Copy + PartialEq, E: Copy> Default for TweenScheduler<P, E> {
    fn default() -> Self {
        Self::new()
    }
}
