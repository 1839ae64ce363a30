use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque handle to a task registered with a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub(crate) fn from_raw(id: u64) -> Self {
        Self(id)
    }
}

/// Fire-once delayed tasks.
///
/// Components never call timer APIs directly; they hand a task to a scheduler
/// and keep the returned handle so the task can be cancelled on teardown.
pub trait Scheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle;

    /// Returns false if the task already fired or was cancelled.
    fn cancel(&mut self, handle: TaskHandle) -> bool;

    fn cancel_all(&mut self);
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Nothing fires on its own; call [`ManualScheduler::advance_to`] to move time
/// forward and receive due tasks in deadline order.
#[derive(Debug)]
pub struct ManualScheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TaskHandle), T>,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ManualScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    fn is_pending(&self, handle: TaskHandle) -> bool {
        self.queue.keys().any(|(_, h)| *h == handle)
    }

    /// Move the clock to `until`, handing every task due at or before it to
    /// `on_fire`. Tasks scheduled from inside `on_fire` are picked up as well
    /// if they fall within the window.
    pub fn advance_to<F>(&mut self, until: Duration, mut on_fire: F)
    where
        F: FnMut(&mut Self, T),
    {
        while let Some(entry) = self.queue.first_entry() {
            let (at, _) = *entry.key();
            if at > until {
                break;
            }
            let task = entry.remove();
            self.now = at;
            on_fire(self, task);
        }
        if until > self.now {
            self.now = until;
        }
    }

    /// Convenience for [`ManualScheduler::advance_to`] relative to now.
    pub fn advance<F>(&mut self, by: Duration, on_fire: F)
    where
        F: FnMut(&mut Self, T),
    {
        let until = self.now + by;
        self.advance_to(until, on_fire);
    }
}

impl<T> Scheduler<T> for ManualScheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle::from_raw(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, handle), task);
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let key = self.queue.keys().find(|(_, h)| *h == handle).copied();
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    fn cancel_all(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tasks_fire_in_deadline_order() {
        let mut sched = ManualScheduler::new();
        sched.schedule(ms(300), "c");
        sched.schedule(ms(100), "a");
        sched.schedule(ms(200), "b");

        let mut fired = Vec::new();
        sched.advance_to(ms(1000), |_, t| fired.push(t));
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert_eq!(sched.now(), ms(1000));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_advance_stops_at_window() {
        let mut sched = ManualScheduler::new();
        sched.schedule(ms(50), 1);
        sched.schedule(ms(150), 2);

        let mut fired = Vec::new();
        sched.advance(ms(100), |_, t| fired.push(t));
        assert_eq!(fired, vec![1]);
        assert_eq!(sched.pending(), 1);

        // Deadline is inclusive
        sched.advance(ms(50), |_, t| fired.push(t));
        assert_eq!(fired, vec![1, 2]);
    }

    #[test]
    fn test_cancel() {
        let mut sched = ManualScheduler::new();
        let keep = sched.schedule(ms(10), "keep");
        let drop = sched.schedule(ms(10), "drop");

        assert!(sched.cancel(drop));
        assert!(!sched.cancel(drop), "second cancel should report nothing removed");
        assert!(sched.is_pending(keep));

        let mut fired = Vec::new();
        sched.advance(ms(10), |_, t| fired.push(t));
        assert_eq!(fired, vec!["keep"]);
        assert!(!sched.cancel(keep), "fired task can't be cancelled");
    }

    #[test]
    fn test_cancel_all() {
        let mut sched = ManualScheduler::new();
        sched.schedule(ms(10), ());
        sched.schedule(ms(20), ());
        sched.cancel_all();
        assert_eq!(sched.pending(), 0);

        let mut count = 0;
        sched.advance(ms(100), |_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_tasks_scheduled_while_firing() {
        let mut sched = ManualScheduler::new();
        sched.schedule(ms(100), 1u32);

        let mut fired = Vec::new();
        sched.advance_to(ms(500), |s, t| {
            fired.push((s.now(), t));
            if t == 1 {
                // relative to the firing time, not the end of the window
                s.schedule(ms(200), 2);
                s.schedule(ms(1000), 3);
            }
        });
        assert_eq!(fired, vec![(ms(100), 1), (ms(300), 2)]);
        assert_eq!(sched.pending(), 1);
    }
}
