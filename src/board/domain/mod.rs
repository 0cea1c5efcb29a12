//! Domain model for the content-production task board.
//!
//! The board domain models task creation, per-role assignment against a
//! static staff directory, the draft-to-started lifecycle, and per-role
//! phase decisions while keeping all infrastructure concerns outside of the
//! domain boundary.

mod decision;
mod directory;
mod error;
mod ids;
mod role;
mod task;
mod thumbnail;

pub use decision::{PhaseDecision, TaskState};
pub use directory::{DirectoryLoadError, Employee, StaffDirectory};
pub use error::{
    BoardDomainError, ParsePhaseDecisionError, ParseRoleError, ParseTaskStateError,
};
pub use ids::{EmployeeId, TaskId};
pub use role::Role;
pub use task::Task;
pub use thumbnail::Thumbnail;
