//! Persistence layer for the SendPulse backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - SQL migrations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
