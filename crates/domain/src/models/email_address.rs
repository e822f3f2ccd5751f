//! Email address domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A single email address owned by an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmailAddress {
    pub id: Uuid,
    pub address: String,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new email address.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateEmailAddressRequest {
    #[validate(email(message = "Invalid email format"))]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validates_address() {
        let ok = CreateEmailAddressRequest {
            address: "ada@example.com".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad = CreateEmailAddressRequest {
            address: "nope".to_string(),
        };
        assert!(bad.validate().is_err());
    }
}
