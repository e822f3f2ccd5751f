//! Organization domain models.
//!
//! The organization is the tenant boundary; every other resource is scoped
//! to exactly one organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Organization domain model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new organization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_blank_name() {
        let req = CreateOrganizationRequest {
            name: "   ".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_name() {
        let req = CreateOrganizationRequest {
            name: "Acme".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
