//! Domain model for project and task tracking.
//!
//! Projects own ordered task collections and allocate task identifiers;
//! tasks carry priority, state and a set-once assignee. Project state and
//! last-updated dates are derived on demand. Persistence concerns stay
//! outside the domain boundary; the domain only converts to and from plain
//! records.

mod error;
mod ids;
mod matcher;
mod priority;
mod project;
mod snapshot;
mod state;
mod task;

pub use error::{
    ParseProjectStateError, ParseTaskPriorityError, ParseTaskStateError, ProjectDomainError,
};
pub use ids::{ProjectId, TaskId};
pub use matcher::{AssigneeMatcher, PriorityMatcher, TaskMatcher, UnfinishedTasks};
pub use priority::TaskPriority;
pub use project::{PersistedProjectData, Project};
pub use snapshot::ProjectsSnapshot;
pub use state::{ProjectState, TaskState};
pub use task::{PersistedTaskData, Task};
