//! Single-shot deferred work, standing in for the browser's
//! animation-frame callback.

/// Holds at most one pending task for the next frame.
///
/// Scheduling again replaces the pending task, so a preempted update cycle
/// never leaves stale callbacks queued behind the new one. Cancelling on
/// teardown keeps a late tick from acting on a destroyed instance.
#[derive(Debug)]
pub struct FrameScheduler<T> {
    pending: Option<T>,
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Queue a task for the next frame, replacing any pending one.
    pub fn schedule(&mut self, task: T) {
        self.pending = Some(task);
    }

    /// Pop the pending task for execution.
    pub fn take_due(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending task without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
