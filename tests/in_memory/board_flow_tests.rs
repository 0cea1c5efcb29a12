//! End-to-end board flow over the public API.

use super::helpers::{TestBoardService, create_titled, service};
use eyre::ensure;
use greenlight::board::{
    domain::{EmployeeId, PhaseDecision, Role, TaskState, Thumbnail},
    ports::TaskRepositoryError,
    services::{AssigneeFilter, TaskBoardError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_production_flow(service: TestBoardService) -> eyre::Result<()> {
    let created = create_titled(&service, "Most famous serial killers").await?;
    ensure!(created.state() == TaskState::Draft);

    // Staff the task while it is still a draft.
    service
        .assign_role(created.id(), Role::Scriptwriting, EmployeeId::new(1))
        .await?;
    service
        .assign_role(created.id(), Role::Voiceover, EmployeeId::new(4))
        .await?;
    let staffed = service
        .assign_role(created.id(), Role::Thumbnail, EmployeeId::new(10))
        .await?;
    ensure!(staffed.assignments().len() == 3);

    let started = service.start_project(created.id()).await?;
    ensure!(started.state() == TaskState::Started);

    let decided = service
        .set_phase_decision(created.id(), Role::Scriptwriting, PhaseDecision::Approved)
        .await?;
    ensure!(decided.phase_decision(Role::Scriptwriting) == PhaseDecision::Approved);
    ensure!(decided.phase_decision(Role::Voiceover) == PhaseDecision::Pending);

    service.delete_task(created.id()).await?;
    let after_delete = service.find_task(created.id()).await?;
    ensure!(after_delete.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_and_save_replaces_the_stored_task(service: TestBoardService) -> eyre::Result<()> {
    let created = create_titled(&service, "Working title").await?;

    let mut edited = created.clone();
    edited.set_title("Most feared gang leaders", &mockable::DefaultClock)?;
    edited.set_description("Some description", &mockable::DefaultClock);
    let saved = service.save_task(edited).await?;

    let stored = service
        .find_task(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task missing after save"))?;
    ensure!(stored == saved);
    ensure!(stored.title() == "Most feared gang leaders");
    ensure!(stored.description() == "Some description");
    ensure!(stored.last_edited() >= created.last_edited());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn thumbnail_changes_bypass_the_save_path(service: TestBoardService) -> eyre::Result<()> {
    let created = create_titled(&service, "Needs artwork").await?;
    let payload = Thumbnail::new("data:image/png;base64,iVBORw0KGgo=")?;

    // No save call: the thumbnail is applied immediately.
    service.set_thumbnail(created.id(), payload.clone()).await?;

    let stored = service
        .find_task(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task missing after thumbnail change"))?;
    ensure!(stored.thumbnail() == Some(&payload));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fill_default_assignments_staffs_one_person_roles(
    service: TestBoardService,
) -> eyre::Result<()> {
    let created = create_titled(&service, "Auto-staffed").await?;

    let filled = service.fill_default_assignments(created.id()).await?;

    ensure!(filled.assignee(Role::Voiceover) == Some(EmployeeId::new(4)));
    ensure!(filled.assignee(Role::FileOrganization) == Some(EmployeeId::new(5)));
    ensure!(filled.assignee(Role::Scriptwriting).is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_ids_surface_not_found(
    service: TestBoardService,
) -> eyre::Result<()> {
    let ghost = create_titled(&service, "Ghost").await?;
    service.delete_task(ghost.id()).await?;

    let start_result = service.start_project(ghost.id()).await;
    ensure!(matches!(
        start_result,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let delete_result = service.delete_task(ghost.id()).await;
    ensure!(matches!(
        delete_result,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let listed = service.list_tasks(AssigneeFilter::All).await?;
    ensure!(listed.is_empty());
    Ok(())
}
