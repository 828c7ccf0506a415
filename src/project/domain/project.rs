//! Project aggregate root.

use super::{
    PersistedTaskData, ProjectDomainError, ProjectId, ProjectState, Task, TaskId, TaskMatcher,
    TaskPriority, task::today,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Project aggregate root.
///
/// Owns its tasks and the task identifier counter. Project state and the
/// last-updated date are derived from the tasks on every read.
///
/// Projects compare and order by title, which is unique within a
/// [`ProjectsManager`](crate::project::services::ProjectsManager).
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    created: NaiveDate,
    next_task_id: TaskId,
    tasks: Vec<Task>,
}

/// Plain record for exporting and restoring a project with its tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedProjectData {
    /// Persisted registry identifier.
    pub id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation date.
    pub created: NaiveDate,
    /// Persisted next task identifier.
    pub next_task_id: TaskId,
    /// Persisted tasks in insertion order.
    #[serde(default)]
    pub tasks: Vec<PersistedTaskData>,
}

impl Project {
    /// Creates an empty project. Only the registry allocates project
    /// identifiers, so construction is crate-private.
    pub(crate) fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created: today(clock),
            next_task_id: TaskId::FIRST,
            tasks: Vec::new(),
        }
    }

    /// Reconstructs a project from persisted storage.
    ///
    /// The task counter is raised above the highest stored task identifier
    /// when the persisted counter lags behind it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateTaskId`] when two stored tasks
    /// share an identifier, or [`ProjectDomainError::TaskIdsExhausted`] when a
    /// stored task holds the last representable identifier.
    pub fn from_persisted(data: PersistedProjectData) -> Result<Self, ProjectDomainError> {
        let tasks: Vec<Task> = data.tasks.into_iter().map(Task::from_persisted).collect();
        if let Some(task_id) = first_duplicate_task_id(&tasks) {
            return Err(ProjectDomainError::DuplicateTaskId {
                project_id: data.id,
                task_id,
            });
        }

        let mut floor = TaskId::FIRST;
        for task in &tasks {
            let after = task
                .id()
                .next()
                .ok_or(ProjectDomainError::TaskIdsExhausted(data.id))?;
            floor = floor.max(after);
        }
        if floor > data.next_task_id {
            tracing::warn!(
                project_id = %data.id,
                stored = %data.next_task_id,
                raised_to = %floor,
                "persisted task counter below highest task id"
            );
        }

        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created: data.created,
            next_task_id: data.next_task_id.max(floor),
            tasks,
        })
    }

    /// Exports the project and its tasks as a plain record.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedProjectData {
        PersistedProjectData {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            created: self.created,
            next_task_id: self.next_task_id,
            tasks: self.tasks.iter().map(Task::to_persisted).collect(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn created(&self) -> NaiveDate {
        self.created
    }

    /// Returns the identifier the next added task will receive.
    #[must_use]
    pub const fn next_task_id(&self) -> TaskId {
        self.next_task_id
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the title. Title uniqueness is enforced by the registry, so
    /// renaming goes through
    /// [`ProjectsManager::rename_project`](crate::project::services::ProjectsManager::rename_project).
    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Adds a task with the next free identifier and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskIdsExhausted`] when no identifier is
    /// left to hand out. The project is unchanged on error.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Result<Task, ProjectDomainError> {
        let id = self.next_task_id;
        self.next_task_id = id
            .next()
            .ok_or(ProjectDomainError::TaskIdsExhausted(self.id))?;
        let task = Task::new(id, description, priority);
        self.tasks.push(task.clone());
        tracing::debug!(project_id = %self.id, task_id = %id, "task added");
        Ok(task)
    }

    /// Removes the task with the given identifier.
    ///
    /// Returns `false` when no such task exists. Identifiers of removed tasks
    /// are never handed out again.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed = self.tasks.len() != before;
        if removed {
            tracing::debug!(project_id = %self.id, task_id = %id, "task removed");
        }
        removed
    }

    /// Finds a task by its identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Finds a task by its identifier for mutation.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Returns copies of the tasks accepted by `matcher`, sorted by priority
    /// and then description.
    #[must_use]
    pub fn find_tasks<M>(&self, matcher: &M) -> Vec<Task>
    where
        M: TaskMatcher + ?Sized,
    {
        let mut found: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| matcher.matches(task))
            .cloned()
            .collect();
        found.sort();
        found
    }

    /// Derives the project state from its tasks.
    #[must_use]
    pub fn state(&self) -> ProjectState {
        if self.tasks.is_empty() {
            ProjectState::Empty
        } else if self.tasks.iter().all(Task::is_done) {
            ProjectState::Completed
        } else {
            ProjectState::Ongoing
        }
    }

    /// Returns the latest of the creation date and every task update date.
    #[must_use]
    pub fn last_updated(&self) -> NaiveDate {
        self.tasks
            .iter()
            .filter_map(Task::last_update)
            .fold(self.created, NaiveDate::max)
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Project {}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, {} tasks, updated {})",
            self.id,
            self.title,
            self.state(),
            self.tasks.len(),
            self.last_updated()
        )
    }
}

fn first_duplicate_task_id(tasks: &[Task]) -> Option<TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks.iter().map(Task::id).find(|id| !seen.insert(*id))
}
