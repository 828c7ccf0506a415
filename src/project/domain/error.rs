//! Error types for project and task domain operations.

use super::{ProjectId, TaskId};
use thiserror::Error;

/// Errors returned by project registry and task aggregate operations.
///
/// Every variant is a recoverable, expected condition. Failing operations
/// leave the aggregate untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// Another project already uses the requested title.
    #[error("a project titled '{0}' already exists")]
    DuplicateTitle(String),

    /// The project title is empty after trimming.
    #[error("project title must not be empty")]
    EmptyProjectTitle,

    /// The task already has an assignee; assignees are set once.
    #[error("task {task_id} is already assigned to '{assignee}'")]
    AlreadyAssigned {
        /// Task whose assignee was already set.
        task_id: TaskId,
        /// Assignee recorded on the task.
        assignee: String,
    },

    /// The assignee name is empty after trimming.
    #[error("assignee must not be empty")]
    EmptyAssignee,

    /// No project with the identifier is held by the registry.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Two restored projects share an identifier.
    #[error("duplicate project id: {0}")]
    DuplicateProjectId(ProjectId),

    /// Two restored tasks of one project share an identifier.
    #[error("duplicate task id {task_id} in project {project_id}")]
    DuplicateTaskId {
        /// Project holding both tasks.
        project_id: ProjectId,
        /// Identifier used twice.
        task_id: TaskId,
    },

    /// Every project identifier has been handed out.
    #[error("project identifiers exhausted")]
    ProjectIdsExhausted,

    /// Every task identifier of the project has been handed out.
    #[error("task identifiers exhausted in project {0}")]
    TaskIdsExhausted(ProjectId),
}

/// Error returned while parsing project states from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project state: {0}")]
pub struct ParseProjectStateError(pub String);

/// Error returned while parsing task states from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);

/// Error returned while parsing task priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
