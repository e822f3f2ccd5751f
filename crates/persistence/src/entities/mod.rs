//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod campaign;
pub mod email_address;
pub mod email_group;
pub mod email_group_member;
pub mod organization;
pub mod profile;
pub mod template;

pub use campaign::{CampaignEntity, CampaignStatusDb};
pub use email_address::EmailAddressEntity;
pub use email_group::EmailGroupEntity;
pub use email_group_member::EmailGroupMemberEntity;
pub use organization::OrganizationEntity;
pub use profile::ProfileEntity;
pub use template::TemplateEntity;
