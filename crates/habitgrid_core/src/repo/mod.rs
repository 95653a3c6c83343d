//! Persistence layer for the habit collection.
//!
//! # Responsibility
//! - Own all durable habit state behind one store type.
//! - Keep serialization details out of service/business orchestration.
//!
//! # Invariants
//! - Every mutation is a full read-modify-write of the whole collection.
//! - Store APIs return semantic errors (`NotFound`) in addition to storage
//!   transport errors.

pub mod habit_repo;
