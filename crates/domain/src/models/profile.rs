//! Profile domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A user profile belonging to an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub timezone: Option<String>,
    pub bio: Option<String>,
    pub picture_url: Option<String>,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub timezone: Option<String>,
    pub bio: Option<String>,
    pub picture_url: Option<String>,
}

/// Request to update a profile.
///
/// A full replace: every field is written, optional ones with whatever the
/// body carries (absent means null, not "keep").
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub timezone: Option<String>,
    pub bio: Option<String>,
    pub picture_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_rejects_invalid_email() {
        let req = UpdateProfileRequest {
            username: "donna".to_string(),
            email: "still-not-an-email".to_string(),
            first_name: None,
            last_name: None,
            timezone: None,
            bio: None,
            picture_url: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_invalid_email() {
        let req = CreateProfileRequest {
            username: "donna".to_string(),
            email: "not-an-email".to_string(),
            first_name: None,
            last_name: None,
            timezone: None,
            bio: None,
            picture_url: None,
        };
        assert!(req.validate().is_err());
    }
}
