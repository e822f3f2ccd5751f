//! HTTP route handlers.

pub mod campaigns;
pub mod email_addresses;
pub mod email_group_members;
pub mod email_groups;
pub mod health;
pub mod organizations;
pub mod profiles;
pub mod templates;
