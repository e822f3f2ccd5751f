//! Domain layer for the SendPulse backend.
//!
//! This crate contains:
//! - Domain models (Organization, Campaign, Template, EmailGroup, ...)
//! - Business logic services (campaign lifecycle events)
//! - Domain error types

pub mod models;
pub mod services;
