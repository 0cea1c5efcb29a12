//! Content-production task board.
//!
//! Tracks tasks through the five fixed production roles (scriptwriting,
//! voiceover, file organization, video edit, thumbnail), with per-role
//! assignment against a static staff directory and per-role approval
//! decisions once a project starts. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
