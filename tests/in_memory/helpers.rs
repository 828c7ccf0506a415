//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use worktrack::project::{
    adapters::memory::InMemorySnapshotStore,
    domain::{ProjectId, TaskPriority, TaskState},
    services::{ProjectsManager, SnapshotService},
};

/// Service type used by the snapshot flow tests.
pub type TestSnapshotService = SnapshotService<InMemorySnapshotStore>;

/// Provides a clock for mutations.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Provides a fresh, empty in-memory store.
#[fixture]
pub fn store() -> InMemorySnapshotStore {
    InMemorySnapshotStore::new()
}

/// Provides a snapshot service over a fresh store.
#[fixture]
pub fn service(store: InMemorySnapshotStore) -> TestSnapshotService {
    SnapshotService::new(store)
}

/// Provides a registry with two projects.
///
/// "Website" (id 1) holds three tasks in mixed states; "Backlog" (id 2) is
/// empty.
#[fixture]
pub fn populated(clock: DefaultClock) -> ProjectsManager {
    let mut manager = ProjectsManager::new();
    manager
        .add_project("Website", "public site relaunch", &clock)
        .expect("unique title");
    manager
        .add_project("Backlog", "", &clock)
        .expect("unique title");

    let website = manager
        .project_mut(ProjectId::new(1))
        .expect("website project exists");
    let copy = website
        .add_task("write copy", TaskPriority::Medium)
        .expect("task id available")
        .id();
    let deploy = website.add_task("deploy", TaskPriority::High).expect("task id available").id();
    website.add_task("pick fonts", TaskPriority::Low).expect("task id available");

    let copy_task = website.task_mut(copy).expect("task exists");
    copy_task.set_state(TaskState::Done, &clock);
    copy_task
        .set_assignee("ada", &clock)
        .expect("first assignment succeeds");
    website
        .task_mut(deploy)
        .expect("task exists")
        .set_state(TaskState::InProgress, &clock);

    manager
}
