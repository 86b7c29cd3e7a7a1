//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate capture, storage and highlighting into use-case APIs.
//! - Keep the surrounding UI layer decoupled from port and store details.

pub mod board;
pub mod recall;
pub mod task_service;
