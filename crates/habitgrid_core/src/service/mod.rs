//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep view shells decoupled from persistence details.

pub mod habit_service;
