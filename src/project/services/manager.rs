//! Project registry: title uniqueness and project identifier allocation.

use crate::project::domain::{Project, ProjectDomainError, ProjectId, ProjectsSnapshot};
use mockable::Clock;
use std::collections::HashSet;

/// Registry owning every tracked project.
///
/// Titles are unique (exact match). Project identifiers start at 1, only
/// increase, and are never reused after a project is removed.
#[derive(Debug, Clone)]
pub struct ProjectsManager {
    projects: Vec<Project>,
    next_project_id: ProjectId,
}

impl Default for ProjectsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsManager {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_project_id: ProjectId::FIRST,
        }
    }

    /// Returns the identifier the next added project will receive.
    #[must_use]
    pub const fn next_project_id(&self) -> ProjectId {
        self.next_project_id
    }

    /// Returns the projects in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns an owned copy of every project, for handing to persistence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns `true` when no project uses exactly `title`.
    #[must_use]
    pub fn is_title_unique(&self, title: &str) -> bool {
        !self.projects.iter().any(|project| project.title() == title)
    }

    /// Creates a project with the next identifier and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyProjectTitle`] when the title is
    /// blank, [`ProjectDomainError::DuplicateTitle`] when another project
    /// already uses it, or [`ProjectDomainError::ProjectIdsExhausted`] when no
    /// identifier is left. The registry is unchanged on error.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Project, ProjectDomainError> {
        let title = title.into();
        self.check_title_available(&title)?;

        let id = self.next_project_id;
        let after = id.next().ok_or(ProjectDomainError::ProjectIdsExhausted)?;
        let project = Project::new(id, title, description, clock);
        self.projects.push(project.clone());
        self.next_project_id = after;
        tracing::debug!(project_id = %id, title = project.title(), "project added");
        Ok(project)
    }

    /// Removes the project with the given identifier and returns it.
    ///
    /// Returns `None` without side effects when no such project exists. The
    /// identifier counter is not rewound.
    pub fn remove_project(&mut self, id: ProjectId) -> Option<Project> {
        let position = self.projects.iter().position(|project| project.id() == id)?;
        let removed = self.projects.remove(position);
        tracing::debug!(project_id = %id, "project removed");
        Some(removed)
    }

    /// Finds a project by identifier.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Finds a project by identifier for mutation.
    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id() == id)
    }

    /// Returns the projects whose title contains `fragment`, case-sensitively,
    /// in registry order.
    #[must_use]
    pub fn find_projects(&self, fragment: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.title().contains(fragment))
            .collect()
    }

    /// Changes a project's title, keeping titles unique.
    ///
    /// Renaming a project to its current title is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::ProjectNotFound`] for an unknown id,
    /// [`ProjectDomainError::EmptyProjectTitle`] for a blank title, or
    /// [`ProjectDomainError::DuplicateTitle`] when another project uses it.
    pub fn rename_project(
        &mut self,
        id: ProjectId,
        title: impl Into<String>,
    ) -> Result<(), ProjectDomainError> {
        let title = title.into();
        let current = self
            .project(id)
            .ok_or(ProjectDomainError::ProjectNotFound(id))?;
        if current.title() == title {
            return Ok(());
        }
        self.check_title_available(&title)?;

        let project = self
            .project_mut(id)
            .ok_or(ProjectDomainError::ProjectNotFound(id))?;
        project.set_title(title);
        Ok(())
    }

    /// Replaces every project, as done when restoring a snapshot.
    ///
    /// The identifier counter is recomputed as the highest held identifier
    /// plus one, or 1 when `projects` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateTitle`] or
    /// [`ProjectDomainError::DuplicateProjectId`] when two incoming projects
    /// share a title or an identifier, and
    /// [`ProjectDomainError::ProjectIdsExhausted`] when an incoming project
    /// holds the last representable identifier. The registry is unchanged on
    /// error.
    pub fn replace_all(&mut self, projects: Vec<Project>) -> Result<(), ProjectDomainError> {
        if let Some(duplicate) = first_duplicate_title(&projects) {
            return Err(ProjectDomainError::DuplicateTitle(duplicate));
        }
        if let Some(duplicate) = first_duplicate_id(&projects) {
            return Err(ProjectDomainError::DuplicateProjectId(duplicate));
        }

        let mut next_project_id = ProjectId::FIRST;
        for project in &projects {
            let after = project
                .id()
                .next()
                .ok_or(ProjectDomainError::ProjectIdsExhausted)?;
            next_project_id = next_project_id.max(after);
        }
        self.next_project_id = next_project_id;
        self.projects = projects;
        tracing::debug!(
            projects = self.projects.len(),
            next_project_id = %self.next_project_id,
            "project registry replaced"
        );
        Ok(())
    }

    /// Exports every project as a versioned snapshot.
    #[must_use]
    pub fn export(&self) -> ProjectsSnapshot {
        ProjectsSnapshot::new(self.projects.iter().map(Project::to_persisted).collect())
    }

    /// Replaces every project with the contents of `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`replace_all`](Self::replace_all), plus
    /// [`ProjectDomainError::DuplicateTaskId`] or
    /// [`ProjectDomainError::TaskIdsExhausted`] when a stored project's tasks
    /// cannot be restored. The registry is unchanged on error.
    pub fn import(&mut self, snapshot: ProjectsSnapshot) -> Result<(), ProjectDomainError> {
        let projects = snapshot
            .projects
            .into_iter()
            .map(Project::from_persisted)
            .collect::<Result<Vec<_>, _>>()?;
        self.replace_all(projects)
    }

    fn check_title_available(&self, title: &str) -> Result<(), ProjectDomainError> {
        if title.trim().is_empty() {
            return Err(ProjectDomainError::EmptyProjectTitle);
        }
        if !self.is_title_unique(title) {
            return Err(ProjectDomainError::DuplicateTitle(title.to_owned()));
        }
        Ok(())
    }
}

/// Returns the first identifier that appears more than once in `projects`.
fn first_duplicate_id(projects: &[Project]) -> Option<ProjectId> {
    let mut seen = HashSet::with_capacity(projects.len());
    projects.iter().map(Project::id).find(|id| !seen.insert(*id))
}

/// Returns the first title that appears more than once in `projects`.
fn first_duplicate_title(projects: &[Project]) -> Option<String> {
    let mut seen = HashSet::with_capacity(projects.len());
    projects
        .iter()
        .map(Project::title)
        .find(|title| !seen.insert(*title))
        .map(str::to_owned)
}
