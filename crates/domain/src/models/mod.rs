//! Domain models for SendPulse.

pub mod campaign;
pub mod email_address;
pub mod email_group;
pub mod email_group_member;
pub mod organization;
pub mod profile;
pub mod template;

pub use campaign::{
    Campaign, CampaignStatus, CreateCampaignRequest, UpdateCampaignRequest,
};
pub use email_address::{CreateEmailAddressRequest, EmailAddress};
pub use email_group::{CreateEmailGroupRequest, EmailGroup};
pub use email_group_member::{CreateEmailGroupMemberRequest, EmailGroupMember};
pub use organization::{CreateOrganizationRequest, Organization};
pub use profile::{CreateProfileRequest, Profile, UpdateProfileRequest};
pub use template::{CreateTemplateRequest, Template};
