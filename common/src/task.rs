//! Tick-counted periodic timers.
//!
//! Ticks are the only unit of time: a task with interval `n` fires on every
//! `n`-th call to `update` while it is running.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    interval: u32,
    elapsed: u32,
    running: bool,
}

impl Task {
    /// An interval of zero is treated as one.
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            elapsed: 0,
            running: true,
        }
    }

    /// Advances one tick. Returns true when `elapsed` wraps to zero.
    /// A paused task does not advance.
    pub fn update(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed = (self.elapsed + 1) % self.interval;
        self.elapsed == 0
    }

    pub fn update_with<F: FnOnce()>(&mut self, callback: F) -> bool {
        let fired = self.update();
        if fired {
            callback();
        }
        fired
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }
}

/// A [`Task`] that owns the callback it fires.
pub struct ScheduledTask<F: FnMut()> {
    task: Task,
    callback: F,
}

impl<F: FnMut()> ScheduledTask<F> {
    pub fn new(interval: u32, callback: F) -> Self {
        Self {
            task: Task::new(interval),
            callback,
        }
    }

    pub fn update(&mut self) -> bool {
        let fired = self.task.update();
        if fired {
            (self.callback)();
        }
        fired
    }

    pub fn pause(&mut self) {
        self.task.pause();
    }

    pub fn resume(&mut self) {
        self.task.resume();
    }

    pub fn reset(&mut self) {
        self.task.reset();
    }

    pub fn task(&self) -> &Task {
        &self.task
    }
}
