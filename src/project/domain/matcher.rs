//! Task filtering predicates.
//!
//! [`Project::find_tasks`](super::Project::find_tasks) accepts anything
//! implementing [`TaskMatcher`], including plain closures.

use super::{Task, TaskPriority};

/// Predicate deciding whether a task belongs in a filtered listing.
pub trait TaskMatcher {
    /// Returns `true` when `task` should be kept.
    fn matches(&self, task: &Task) -> bool;
}

impl<F> TaskMatcher for F
where
    F: Fn(&Task) -> bool,
{
    fn matches(&self, task: &Task) -> bool {
        self(task)
    }
}

/// Keeps every task that is not done, including tasks with no state yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnfinishedTasks;

impl TaskMatcher for UnfinishedTasks {
    fn matches(&self, task: &Task) -> bool {
        !task.is_done()
    }
}

/// Keeps tasks with exactly the given priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityMatcher {
    priority: TaskPriority,
}

impl PriorityMatcher {
    /// Creates a matcher for `priority`.
    #[must_use]
    pub const fn new(priority: TaskPriority) -> Self {
        Self { priority }
    }
}

impl TaskMatcher for PriorityMatcher {
    fn matches(&self, task: &Task) -> bool {
        task.priority() == self.priority
    }
}

/// Keeps tasks assigned to exactly the given name (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeMatcher {
    assignee: String,
}

impl AssigneeMatcher {
    /// Creates a matcher for `assignee`.
    #[must_use]
    pub fn new(assignee: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
        }
    }
}

impl TaskMatcher for AssigneeMatcher {
    fn matches(&self, task: &Task) -> bool {
        task.assignee() == Some(self.assignee.as_str())
    }
}
