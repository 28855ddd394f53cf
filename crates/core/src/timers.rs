//! Deferred tasks keyed by a generation token.
//!
//! Tasks such as the settle delay or a win message fade-out are scheduled for a
//! later frame. Each carries the generation that was current when it was
//! scheduled; when it comes due under a different generation it is dropped
//! instead of run, so a timer from an earlier spin can never touch a newer one.

use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deferred<T> {
    due_ms: u64,
    generation: u64,
    task: T,
}

/// Pending deferred tasks, polled once per frame.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    pending: Vec<Deferred<T>>,
}

impl<T: Copy + Debug> TimerQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
        }
    }

    /// Run `task` at `now_ms + delay_ms` if `generation` is still current then.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u32, generation: u64, task: T) {
        self.pending.push(Deferred {
            due_ms: now_ms.saturating_add(delay_ms as u64),
            generation,
            task,
        });
    }

    /// Hand every task due at `now_ms` to `run`, in scheduling order.
    ///
    /// Due tasks from another generation are discarded.
    pub fn drain_due(&mut self, now_ms: u64, current_generation: u64, mut run: impl FnMut(T)) {
        self.pending.retain(|d| {
            if d.due_ms > now_ms {
                return true;
            }
            if d.generation == current_generation {
                run(d.task);
            } else {
                log::debug!(
                    "dropping stale {:?} (generation {} != {})",
                    d.task,
                    d.generation,
                    current_generation
                );
            }
            false
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T: Copy + Debug> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
