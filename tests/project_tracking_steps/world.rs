//! Shared world state for project tracking BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use worktrack::project::{
    domain::{Project, ProjectDomainError, ProjectId, TaskId},
    services::ProjectsManager,
};

/// Scenario world for project tracking behaviour tests.
pub struct ProjectWorld {
    /// The registry under test.
    pub manager: ProjectsManager,
    /// Clock handed to every mutation.
    pub clock: DefaultClock,
    /// Result of the last `add_project` call.
    pub last_add_result: Option<Result<Project, ProjectDomainError>>,
    /// Results of assignment attempts, in order.
    pub assignment_results: Vec<Result<(), ProjectDomainError>>,
}

impl ProjectWorld {
    /// Creates a world around an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            manager: ProjectsManager::new(),
            clock: DefaultClock,
            last_add_result: None,
            assignment_results: Vec::new(),
        }
    }

    /// Resolves a project title to its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has the title.
    pub fn project_id(&self, title: &str) -> Result<ProjectId, eyre::Report> {
        self.manager
            .projects()
            .iter()
            .find(|project| project.title() == title)
            .map(Project::id)
            .ok_or_else(|| eyre::eyre!("no project titled {title:?} in scenario world"))
    }

    /// Resolves a task description inside a project to its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the project or the task is missing.
    pub fn task_id(&self, title: &str, description: &str) -> Result<TaskId, eyre::Report> {
        let project_id = self.project_id(title)?;
        self.manager
            .project(project_id)
            .and_then(|project| {
                project
                    .tasks()
                    .iter()
                    .find(|task| task.description() == description)
            })
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task {description:?} in project {title:?}"))
    }

    /// Returns the named project for mutation.
    ///
    /// # Errors
    ///
    /// Returns an error when no project has the title.
    pub fn project_mut(&mut self, title: &str) -> Result<&mut Project, eyre::Report> {
        let id = self.project_id(title)?;
        self.manager
            .project_mut(id)
            .ok_or_else(|| eyre::eyre!("project {title:?} vanished from the registry"))
    }
}

impl Default for ProjectWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectWorld {
    ProjectWorld::default()
}
