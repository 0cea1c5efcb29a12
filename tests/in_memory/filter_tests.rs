//! Assignee filtering and board ordering.

use super::helpers::{TestBoardService, create_titled, service};
use eyre::ensure;
use greenlight::board::{
    domain::{EmployeeId, Role, Task, TaskId},
    services::AssigneeFilter,
};
use rstest::rstest;

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn all_filter_lists_every_task_in_creation_order(
    service: TestBoardService,
) -> eyre::Result<()> {
    let first = create_titled(&service, "First").await?;
    let second = create_titled(&service, "Second").await?;
    let third = create_titled(&service, "Third").await?;

    let listed = service.list_tasks(AssigneeFilter::All).await?;

    ensure!(ids(&listed) == vec![first.id(), second.id(), third.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_filter_returns_exactly_the_assigned_tasks(
    service: TestBoardService,
) -> eyre::Result<()> {
    let alice = EmployeeId::new(1);
    let dave = EmployeeId::new(4);

    let scripted = create_titled(&service, "Scripted by Alice").await?;
    service
        .assign_role(scripted.id(), Role::Scriptwriting, alice)
        .await?;

    let voiced = create_titled(&service, "Voiced by Dave").await?;
    service.assign_role(voiced.id(), Role::Voiceover, dave).await?;

    let both = create_titled(&service, "Alice and Dave").await?;
    service
        .assign_role(both.id(), Role::Scriptwriting, alice)
        .await?;
    service.assign_role(both.id(), Role::Voiceover, dave).await?;

    let unassigned = create_titled(&service, "Nobody yet").await?;

    let alice_tasks = service.list_tasks(AssigneeFilter::Assignee(alice)).await?;
    ensure!(ids(&alice_tasks) == vec![scripted.id(), both.id()]);

    let dave_tasks = service.list_tasks(AssigneeFilter::Assignee(dave)).await?;
    ensure!(ids(&dave_tasks) == vec![voiced.id(), both.id()]);

    let everything = service.list_tasks(AssigneeFilter::All).await?;
    ensure!(everything.len() == 4);
    ensure!(everything.iter().any(|task| task.id() == unassigned.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassignment_updates_the_assignee_filter(service: TestBoardService) -> eyre::Result<()> {
    let judy = EmployeeId::new(6);
    let karl = EmployeeId::new(7);

    let task = create_titled(&service, "Edit pass").await?;
    service.assign_role(task.id(), Role::VideoEdit, judy).await?;
    service.assign_role(task.id(), Role::VideoEdit, karl).await?;

    let judy_tasks = service.list_tasks(AssigneeFilter::Assignee(judy)).await?;
    ensure!(judy_tasks.is_empty(), "Judy was replaced on the task");

    let karl_tasks = service.list_tasks(AssigneeFilter::Assignee(karl)).await?;
    ensure!(ids(&karl_tasks) == vec![task.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_removes_it_from_assignee_listings(
    service: TestBoardService,
) -> eyre::Result<()> {
    let grace = EmployeeId::new(5);

    let kept = create_titled(&service, "Kept").await?;
    service
        .assign_role(kept.id(), Role::FileOrganization, grace)
        .await?;
    let dropped = create_titled(&service, "Dropped").await?;
    service
        .assign_role(dropped.id(), Role::FileOrganization, grace)
        .await?;

    service.delete_task(dropped.id()).await?;

    let grace_tasks = service.list_tasks(AssigneeFilter::Assignee(grace)).await?;
    ensure!(ids(&grace_tasks) == vec![kept.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_an_assignment_removes_the_task_from_the_filter(
    service: TestBoardService,
) -> eyre::Result<()> {
    let mallory = EmployeeId::new(9);

    let task = create_titled(&service, "Thumbnail work").await?;
    service
        .assign_role(task.id(), Role::Thumbnail, mallory)
        .await?;
    service.clear_assignment(task.id(), Role::Thumbnail).await?;

    let mallory_tasks = service
        .list_tasks(AssigneeFilter::Assignee(mallory))
        .await?;
    ensure!(mallory_tasks.is_empty());
    Ok(())
}
