//! When steps for project tracking BDD scenarios.

use super::world::ProjectWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use worktrack::project::domain::{ProjectId, TaskPriority, TaskState};

#[when(r#"the project "{title}" is created with description "{description}""#)]
fn create_project(world: &mut ProjectWorld, title: String, description: String) {
    let result = world.manager.add_project(title, description, &world.clock);
    world.last_add_result = Some(result);
}

#[when(r#"a project titled "{title}" is added"#)]
fn add_project(world: &mut ProjectWorld, title: String) {
    let result = world.manager.add_project(title, "", &world.clock);
    world.last_add_result = Some(result);
}

#[when("the project with id {id:u32} is removed")]
fn remove_project(world: &mut ProjectWorld, id: u32) -> Result<(), eyre::Report> {
    world
        .manager
        .remove_project(ProjectId::new(id))
        .map(|_| ())
        .ok_or_else(|| eyre::eyre!("project {id} was not in the registry"))
}

#[when(r#"the task "{description}" with priority "{priority}" is added to "{title}""#)]
fn add_task(
    world: &mut ProjectWorld,
    description: String,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    world
        .project_mut(&title)?
        .add_task(description, parsed)
        .wrap_err("add task in scenario")?;
    Ok(())
}

#[when(r#"the task "{description}" in "{title}" is marked "{state}""#)]
fn mark_task(
    world: &mut ProjectWorld,
    description: String,
    title: String,
    state: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid state in scenario: {err}"))?;
    let project_id = world.project_id(&title)?;
    let task_id = world.task_id(&title, &description)?;
    world
        .manager
        .project_mut(project_id)
        .and_then(|project| project.task_mut(task_id))
        .ok_or_else(|| eyre::eyre!("task {description:?} vanished from {title:?}"))?
        .set_state(parsed, &world.clock);
    Ok(())
}

#[when(r#""{assignee}" is assigned to the task "{description}" in "{title}""#)]
fn assign_task(
    world: &mut ProjectWorld,
    assignee: String,
    description: String,
    title: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project_id(&title)?;
    let task_id = world.task_id(&title, &description)?;
    let result = world
        .manager
        .project_mut(project_id)
        .and_then(|project| project.task_mut(task_id))
        .ok_or_else(|| eyre::eyre!("task {description:?} vanished from {title:?}"))?
        .set_assignee(assignee, &world.clock);
    world.assignment_results.push(result);
    Ok(())
}
