//! Greenlight: a content-production task board.
//!
//! This crate provides the core model for tracking video-production tasks
//! through a fixed set of production roles, with per-role assignment and
//! per-role approval decisions.
//!
//! # Architecture
//!
//! Greenlight follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`board`]: Task lifecycle, staff directory, and board services

pub mod board;
