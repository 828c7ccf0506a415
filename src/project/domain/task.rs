//! Task entity owned by a project.

use super::{ProjectDomainError, TaskId, TaskPriority, TaskState};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A unit of work inside a project.
///
/// Tasks compare and order by `(priority, description)` only. The identifier
/// is what makes a task unique inside its project; two tasks with the same
/// description and priority are equal but remain separately addressable.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    description: String,
    priority: TaskPriority,
    state: Option<TaskState>,
    assignee: Option<String>,
    last_update: Option<NaiveDate>,
}

/// Plain record for exporting and restoring a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted project-scoped identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted state, `None` when never set.
    #[serde(default)]
    pub state: Option<TaskState>,
    /// Persisted assignee, if any.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Persisted date of the latest mutation, if any.
    #[serde(default)]
    pub last_update: Option<NaiveDate>,
}

impl Task {
    /// Creates an unassigned task with no state. Only projects allocate task
    /// identifiers, so construction is crate-private.
    pub(crate) fn new(id: TaskId, description: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            state: None,
            assignee: None,
            last_update: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            priority: data.priority,
            state: data.state,
            assignee: data.assignee,
            last_update: data.last_update,
        }
    }

    /// Exports the task as a plain record.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedTaskData {
        PersistedTaskData {
            id: self.id,
            description: self.description.clone(),
            priority: self.priority,
            state: self.state,
            assignee: self.assignee.clone(),
            last_update: self.last_update,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task state, or `None` if it was never set.
    #[must_use]
    pub const fn state(&self) -> Option<TaskState> {
        self.state
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the date of the latest state, priority or assignee change.
    #[must_use]
    pub const fn last_update(&self) -> Option<NaiveDate> {
        self.last_update
    }

    /// Returns `true` when the task state is [`TaskState::Done`].
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == Some(TaskState::Done)
    }

    /// Overwrites the task state.
    pub fn set_state(&mut self, state: TaskState, clock: &impl Clock) {
        self.state = Some(state);
        self.touch(clock);
    }

    /// Overwrites the task priority.
    pub fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Assigns the task to someone. Assignment happens at most once.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::AlreadyAssigned`] if an assignee is
    /// already recorded (even when it equals `assignee`), or
    /// [`ProjectDomainError::EmptyAssignee`] when `assignee` is blank.
    pub fn set_assignee(
        &mut self,
        assignee: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        if let Some(current) = &self.assignee {
            return Err(ProjectDomainError::AlreadyAssigned {
                task_id: self.id,
                assignee: current.clone(),
            });
        }
        let name = assignee.into();
        if name.trim().is_empty() {
            return Err(ProjectDomainError::EmptyAssignee);
        }
        self.assignee = Some(name);
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.last_update = Some(today(clock));
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.description == other.description
    }
}

impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.description.cmp(&other.description))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.id, self.priority, self.description)?;
        match self.state {
            Some(state) => write!(f, " ({state})")?,
            None => f.write_str(" (unset)")?,
        }
        if let Some(assignee) = &self.assignee {
            write!(f, " @{assignee}")?;
        }
        Ok(())
    }
}

/// Calendar date of the clock's current instant, in UTC.
pub(super) fn today(clock: &impl Clock) -> NaiveDate {
    clock.utc().date_naive()
}
