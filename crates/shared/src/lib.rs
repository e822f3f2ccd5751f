//! Shared utilities and common types for the SendPulse backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Page-based pagination types
//! - Common validation logic

pub mod pagination;
pub mod validation;
