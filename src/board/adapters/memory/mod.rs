//! In-memory adapters for the board ports.

mod task;

pub use task::InMemoryTaskRepository;
