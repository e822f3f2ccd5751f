//! Campaign domain models and lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use super::email_group::EmailGroup;
use super::template::Template;

/// Campaign lifecycle status.
///
/// Transitions are unconstrained: any status is reachable from any other
/// via update. The launched-event hook fires only on a committed change
/// into `Launched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Launched,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Launched => "launched",
        }
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(CampaignStatus::Draft),
            "scheduled" => Ok(CampaignStatus::Scheduled),
            "launched" => Ok(CampaignStatus::Launched),
            _ => Err(format!("Invalid campaign status: {}", s)),
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Campaign domain model.
///
/// `templates` and `email_groups` are derived collections: they are loaded
/// only on read-by-id and stay empty on list responses to keep lists cheap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub status: CampaignStatus,
    pub organization_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub email_groups: Vec<EmailGroup>,
}

/// Request to create a new campaign.
///
/// Status is not accepted on create; campaigns always start in `draft`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCampaignRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,
}

/// Partial update of a campaign.
///
/// Every field distinguishes "omitted" (`None`, leave unchanged) from
/// "present". For the association lists, `Some(vec![])` clears the
/// relation while `None` leaves it untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateCampaignRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_groups: Option<Vec<Uuid>>,
}

impl UpdateCampaignRequest {
    /// True when the body carries no change at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.templates.is_none()
            && self.email_groups.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        for s in ["draft", "scheduled", "launched"] {
            let parsed: CampaignStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(
            "LAUNCHED".parse::<CampaignStatus>().unwrap(),
            CampaignStatus::Launched
        );
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("paused".parse::<CampaignStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&CampaignStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
    }

    #[test]
    fn test_update_request_omitted_vs_empty_list() {
        // Omitted field deserializes to None: relation untouched.
        let omitted: UpdateCampaignRequest =
            serde_json::from_str(r#"{"name":"Spring Sale"}"#).unwrap();
        assert!(omitted.templates.is_none());
        assert!(omitted.email_groups.is_none());

        // Explicit empty list deserializes to Some(vec![]): relation cleared.
        let cleared: UpdateCampaignRequest =
            serde_json::from_str(r#"{"templates":[]}"#).unwrap();
        assert_eq!(cleared.templates, Some(vec![]));
        assert!(cleared.email_groups.is_none());
    }

    #[test]
    fn test_update_request_is_empty() {
        let req: UpdateCampaignRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());

        let req: UpdateCampaignRequest =
            serde_json::from_str(r#"{"status":"launched"}"#).unwrap();
        assert!(!req.is_empty());
    }
}
