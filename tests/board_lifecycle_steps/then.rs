//! Then steps for board lifecycle BDD scenarios.

use super::world::{BoardWorld, run_async};
use greenlight::board::{
    domain::{BoardDomainError, PhaseDecision, Role, TaskState},
    services::{AssigneeFilter, TaskBoardError},
};
use rstest_bdd_macros::then;

#[then(r#"the task state is "{state}""#)]
fn task_state_is(world: &BoardWorld, state: String) -> Result<(), eyre::Report> {
    let expected_state = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;

    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.state() != expected_state {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected_state.as_str(),
            task.state().as_str()
        ));
    }

    Ok(())
}

#[then("every phase decision is pending")]
fn every_phase_pending(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    for role in Role::ALL {
        if task.phase_decision(role).is_decided() {
            return Err(eyre::eyre!("phase {role} unexpectedly decided"));
        }
    }
    Ok(())
}

#[then(r#"the "{role}" phase decision is "{decision}""#)]
fn phase_decision_is(
    world: &BoardWorld,
    role: String,
    decision: String,
) -> Result<(), eyre::Report> {
    let parsed_role = Role::try_from(role.as_str())
        .map_err(|err| eyre::eyre!("invalid role in scenario: {err}"))?;
    let expected = PhaseDecision::try_from(decision.as_str())
        .map_err(|err| eyre::eyre!("invalid decision in scenario: {err}"))?;

    let task = world
        .current_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.phase_decision(parsed_role) != expected {
        return Err(eyre::eyre!(
            "expected {} decision {}, found {}",
            parsed_role,
            expected.as_str(),
            task.phase_decision(parsed_role).as_str()
        ));
    }
    Ok(())
}

#[then("the decision fails because the project has not started")]
fn decision_fails_not_started(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_decision_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing decision result"))?;

    if !matches!(
        result,
        Err(TaskBoardError::Domain(BoardDomainError::NotStarted(_)))
    ) {
        return Err(eyre::eyre!("expected NotStarted error, got {result:?}"));
    }
    Ok(())
}

#[then("the board lists no tasks")]
fn board_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list_tasks(AssigneeFilter::All))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if !listed.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {}", listed.len()));
    }
    Ok(())
}
