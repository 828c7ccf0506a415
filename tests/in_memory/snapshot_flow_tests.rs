//! In-memory integration tests for snapshot save and restore.

use super::helpers::{TestSnapshotService, clock, populated, service, store};
use mockable::DefaultClock;
use rstest::rstest;
use worktrack::project::{
    adapters::memory::InMemorySnapshotStore,
    domain::{ProjectId, ProjectsSnapshot, TaskId, TaskPriority},
    ports::SnapshotStore,
    services::{ProjectsManager, SnapshotService},
};

#[rstest]
fn restored_registry_continues_numbering(
    service: TestSnapshotService,
    populated: ProjectsManager,
    clock: DefaultClock,
) {
    service.save(&populated).expect("save succeeds");

    let mut restored = ProjectsManager::new();
    service.restore(&mut restored).expect("restore succeeds");
    let created = restored
        .add_project("Launch", "", &clock)
        .expect("unique title");
    let website = restored
        .project_mut(ProjectId::new(1))
        .expect("website restored");
    let task = website.add_task("announce", TaskPriority::High).expect("task id available");

    assert_eq!(created.id(), ProjectId::new(3));
    assert_eq!(task.id(), TaskId::new(3));
}

#[rstest]
fn restore_keeps_task_fields(service: TestSnapshotService, populated: ProjectsManager) {
    service.save(&populated).expect("save succeeds");

    let mut restored = ProjectsManager::new();
    service.restore(&mut restored).expect("restore succeeds");

    let original = populated.project(ProjectId::new(1)).expect("website exists");
    let copy = restored.project(ProjectId::new(1)).expect("website restored");
    assert_eq!(copy.to_persisted(), original.to_persisted());
    assert_eq!(copy.state(), original.state());
    assert_eq!(copy.last_updated(), original.last_updated());
}

#[rstest]
fn saving_twice_keeps_only_the_latest(
    store: InMemorySnapshotStore,
    mut populated: ProjectsManager,
) {
    let service = SnapshotService::new(store.clone());
    service.save(&populated).expect("first save succeeds");
    populated.remove_project(ProjectId::new(2));
    service.save(&populated).expect("second save succeeds");

    let stored = store
        .load()
        .expect("load succeeds")
        .expect("snapshot present");

    assert_eq!(stored.projects.len(), 1);
    assert_eq!(stored.format_version, ProjectsSnapshot::CURRENT_FORMAT_VERSION);
}

#[rstest]
fn failed_restore_leaves_registry_untouched(populated: ProjectsManager) {
    let mut snapshot = populated.export();
    snapshot.format_version = ProjectsSnapshot::CURRENT_FORMAT_VERSION + 1;
    let service = SnapshotService::new(InMemorySnapshotStore::with_snapshot(snapshot));
    let mut target = populated.clone();

    assert!(service.restore(&mut target).is_err());
    assert_eq!(target.export(), populated.export());
}
