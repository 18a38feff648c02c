//! Cancellable deferred callbacks on the UI thread.
//!
//! `UiScheduler` is a timer queue owned by the UI loop. Nothing runs on its
//! own: the host pumps it with [`UiScheduler::advance_to`] (tests, replay) or
//! [`UiScheduler::run_due`] (real clock), and due callbacks execute on the
//! calling thread. Because the handle is `Rc` based it cannot cross threads,
//! so a callback can never deliver gesture events off the UI thread.

use crate::platform::Clock;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type TaskId = u64;

struct ScheduledTask {
    id: TaskId,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerState {
    now_ms: u64,
    next_id: TaskId,
    /// Sorted by `(due_ms, id)` so equal deadlines run in posting order.
    tasks: Vec<ScheduledTask>,
}

impl SchedulerState {
    fn insert(&mut self, due_ms: u64, task: Box<dyn FnOnce()>) -> TaskId {
        self.next_id += 1;
        let id = self.next_id;
        let index = self
            .tasks
            .partition_point(|scheduled| (scheduled.due_ms, scheduled.id) <= (due_ms, id));
        self.tasks.insert(index, ScheduledTask { id, due_ms, task });
        id
    }

    fn remove(&mut self, id: TaskId) -> Option<ScheduledTask> {
        let index = self.tasks.iter().position(|scheduled| scheduled.id == id)?;
        Some(self.tasks.remove(index))
    }

    fn pop_due(&mut self, deadline_ms: u64) -> Option<ScheduledTask> {
        match self.tasks.first() {
            Some(first) if first.due_ms <= deadline_ms => {
                let task = self.tasks.remove(0);
                self.now_ms = self.now_ms.max(task.due_ms);
                Some(task)
            }
            _ => None,
        }
    }
}

/// Single-threaded timer queue for deferred gesture work.
#[derive(Clone, Default)]
pub struct UiScheduler {
    state: Rc<RefCell<SchedulerState>>,
    clock: Option<Rc<dyn Clock>>,
}

impl UiScheduler {
    /// Creates a scheduler whose time only moves through `advance_to`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler that reads the current time from `clock`.
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        let now_ms = clock.now_millis();
        Self {
            state: Rc::new(RefCell::new(SchedulerState {
                now_ms,
                ..SchedulerState::default()
            })),
            clock: Some(clock),
        }
    }

    /// Current scheduler time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        let pumped = self.state.borrow().now_ms;
        match &self.clock {
            Some(clock) => clock.now_millis().max(pumped),
            None => pumped,
        }
    }

    /// Schedules `task` to run `delay_ms` after the current time.
    ///
    /// Dropping the returned registration cancels the task.
    pub fn post_delayed(&self, delay_ms: u64, task: impl FnOnce() + 'static) -> TaskRegistration {
        let due_ms = self.now_ms().saturating_add(delay_ms);
        let id = self.state.borrow_mut().insert(due_ms, Box::new(task));
        log::trace!("scheduled task {id} due at {due_ms}ms");
        TaskRegistration {
            state: Rc::downgrade(&self.state),
            id: Some(id),
        }
    }

    /// Cancels a pending task. Returns false when it already ran or was cancelled.
    pub fn cancel(&self, id: TaskId) -> bool {
        cancel_in(&self.state, id)
    }

    /// Runs, in deadline order, every task due at or before `now_ms`.
    ///
    /// Returns the number of tasks executed. Tasks posted by a running task
    /// are eligible within the same call if they fall due before `now_ms`.
    pub fn advance_to(&self, now_ms: u64) -> usize {
        let mut executed = 0;
        loop {
            let next = self.state.borrow_mut().pop_due(now_ms);
            match next {
                Some(scheduled) => {
                    log::trace!("running task {} (due {}ms)", scheduled.id, scheduled.due_ms);
                    (scheduled.task)();
                    executed += 1;
                }
                None => break,
            }
        }
        let mut state = self.state.borrow_mut();
        state.now_ms = state.now_ms.max(now_ms);
        executed
    }

    /// Advances scheduler time by `millis` and runs due tasks.
    pub fn advance_by(&self, millis: u64) -> usize {
        let target = self.now_ms().saturating_add(millis);
        self.advance_to(target)
    }

    /// Runs everything due according to the attached clock.
    pub fn run_due(&self) -> usize {
        self.advance_to(self.now_ms())
    }

    pub fn pending_tasks(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.state.borrow().tasks.first().map(|scheduled| scheduled.due_ms)
    }

    /// Drops every pending task without running it.
    pub fn clear(&self) {
        let drained = std::mem::take(&mut self.state.borrow_mut().tasks);
        drop(drained);
    }
}

fn cancel_in(state: &Rc<RefCell<SchedulerState>>, id: TaskId) -> bool {
    let removed = match state.try_borrow_mut() {
        Ok(mut state) => state.remove(id),
        Err(_) => {
            log::warn!("task {id} cancelled while the scheduler was busy");
            None
        }
    };
    // The closure is dropped outside the borrow: it may own registrations.
    removed.is_some()
}

/// Handle to a scheduled task. Cancels the task when dropped.
pub struct TaskRegistration {
    state: Weak<RefCell<SchedulerState>>,
    id: Option<TaskId>,
}

impl TaskRegistration {
    pub fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// True while the task is still queued.
    pub fn is_pending(&self) -> bool {
        match (self.id, self.state.upgrade()) {
            (Some(id), Some(state)) => state
                .try_borrow()
                .map(|state| state.tasks.iter().any(|scheduled| scheduled.id == id))
                .unwrap_or(false),
            _ => false,
        }
    }

    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let (Some(id), Some(state)) = (self.id.take(), self.state.upgrade()) {
            cancel_in(&state, id);
        }
    }
}

impl Drop for TaskRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
