//! Application services for the task board.

mod board;

pub use board::{
    AssigneeFilter, CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService,
};
