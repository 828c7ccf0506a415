//! In-memory integration tests for registry and task workflows.

use super::helpers::{clock, populated};
use mockable::DefaultClock;
use rstest::rstest;
use worktrack::project::{
    domain::{
        AssigneeMatcher, PriorityMatcher, ProjectDomainError, ProjectId, ProjectState, Task,
        TaskId, TaskPriority, TaskState, UnfinishedTasks,
    },
    services::ProjectsManager,
};

fn descriptions(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::description).collect()
}

#[rstest]
fn project_ids_grow_across_removals(mut populated: ProjectsManager, clock: DefaultClock) {
    populated
        .remove_project(ProjectId::new(2))
        .expect("backlog exists");
    let third = populated
        .add_project("Archive", "", &clock)
        .expect("unique title");
    populated
        .remove_project(third.id())
        .expect("archive exists");
    let fourth = populated
        .add_project("Archive", "", &clock)
        .expect("title is free again");

    assert_eq!(third.id(), ProjectId::new(3));
    assert_eq!(fourth.id(), ProjectId::new(4));
}

#[rstest]
fn removed_title_becomes_available(mut populated: ProjectsManager, clock: DefaultClock) {
    assert_eq!(
        populated
            .add_project("Backlog", "", &clock)
            .map(|project| project.id()),
        Err(ProjectDomainError::DuplicateTitle("Backlog".to_owned()))
    );

    populated.remove_project(ProjectId::new(2));

    assert!(populated.is_title_unique("Backlog"));
    assert!(populated.add_project("Backlog", "", &clock).is_ok());
}

#[rstest]
fn website_state_moves_to_completed(mut populated: ProjectsManager, clock: DefaultClock) {
    let website = populated
        .project_mut(ProjectId::new(1))
        .expect("website exists");
    assert_eq!(website.state(), ProjectState::Ongoing);

    let open: Vec<TaskId> = website
        .find_tasks(&UnfinishedTasks)
        .iter()
        .map(Task::id)
        .collect();
    for id in open {
        website
            .task_mut(id)
            .expect("task exists")
            .set_state(TaskState::Done, &clock);
    }

    assert_eq!(website.state(), ProjectState::Completed);
    assert!(website.find_tasks(&UnfinishedTasks).is_empty());
    assert_eq!(
        populated
            .project(ProjectId::new(2))
            .map(|project| project.state()),
        Some(ProjectState::Empty)
    );
}

#[rstest]
fn matchers_filter_and_sort_the_website_tasks(populated: ProjectsManager) {
    let website = populated
        .project(ProjectId::new(1))
        .expect("website exists");

    assert_eq!(
        descriptions(&website.find_tasks(&UnfinishedTasks)),
        vec!["pick fonts", "deploy"]
    );
    assert_eq!(
        descriptions(&website.find_tasks(&PriorityMatcher::new(TaskPriority::Medium))),
        vec!["write copy"]
    );
    assert_eq!(
        descriptions(&website.find_tasks(&AssigneeMatcher::new("ada"))),
        vec!["write copy"]
    );
    assert_eq!(
        descriptions(&website.find_tasks(&|task: &Task| task.state().is_some())),
        vec!["write copy", "deploy"]
    );
}

#[rstest]
fn reassignment_is_refused_after_lookup_by_id(
    mut populated: ProjectsManager,
    clock: DefaultClock,
) {
    let website = populated
        .project_mut(ProjectId::new(1))
        .expect("website exists");
    assert!(website.remove_task(TaskId::new(1)));

    let copy_task = website.task_mut(TaskId::new(0)).expect("task 0 remains");
    let result = copy_task.set_assignee("bob", &clock);

    assert!(matches!(
        result,
        Err(ProjectDomainError::AlreadyAssigned { task_id, ref assignee })
            if task_id == TaskId::new(0) && assignee == "ada"
    ));
    assert_eq!(
        website.task(TaskId::new(2)).map(Task::description),
        Some("pick fonts")
    );
}

#[rstest]
fn find_projects_returns_registry_order(mut populated: ProjectsManager, clock: DefaultClock) {
    populated
        .add_project("Web backlog", "", &clock)
        .expect("unique title");

    let found: Vec<&str> = populated
        .find_projects("Web")
        .into_iter()
        .map(|project| project.title())
        .collect();

    assert_eq!(found, vec!["Website", "Web backlog"]);
}
