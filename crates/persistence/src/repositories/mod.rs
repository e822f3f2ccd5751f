//! Repository implementations for database operations.

pub mod campaign;
pub mod email_address;
pub mod email_group;
pub mod email_group_member;
pub mod organization;
pub mod profile;
pub mod template;

pub use campaign::{CampaignChanges, CampaignRepository, CampaignUpdate};
pub use email_address::EmailAddressRepository;
pub use email_group::EmailGroupRepository;
pub use email_group_member::EmailGroupMemberRepository;
pub use organization::OrganizationRepository;
pub use profile::ProfileRepository;
pub use template::TemplateRepository;
