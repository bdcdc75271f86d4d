use std::collections::HashMap;

/// A deferred visual update action.
pub type Task = Box<dyn FnOnce() + Send>;

/// Pending visual updates keyed by label.
///
/// Scheduling under an already-pending label drops the older action without
/// running it; the dispatcher drains the whole set once per frame and is the
/// sole owner of the clear.
#[derive(Default)]
pub struct TaskSet {
    tasks: HashMap<String, Task>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `task` under `label`, replacing any unexecuted task with
    /// the same label.
    pub fn schedule(&mut self, label: impl Into<String>, task: Task) {
        self.tasks.insert(label.into(), task);
    }

    /// Removes and returns all pending tasks, leaving the set empty.
    /// Execution order is unspecified.
    pub fn drain(&mut self) -> Vec<Task> {
        self.tasks.drain().map(|(_, task)| task).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
