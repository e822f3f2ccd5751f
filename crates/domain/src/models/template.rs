//! Template domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An HTML email template owned by an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    pub html: String,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Request to create a new template.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTemplateRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "shared::validation::validate_html_body"))]
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_html() {
        let req = CreateTemplateRequest {
            name: "Welcome".to_string(),
            html: "".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
