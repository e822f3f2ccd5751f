//! Campaign lifecycle event seam.
//!
//! The update path invokes [`EventNotifier::notify_campaign_launched`]
//! exactly once per committed transition into `launched`. Delivery
//! guarantees belong to the notifier implementation; the default
//! [`LogNotifier`] emits the serialized event through `tracing`. Notifier
//! failures never roll back the committed update.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Payload emitted when a campaign transitions into `launched`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CampaignLaunchedEvent {
    pub campaign_id: Uuid,
    pub organization_id: Uuid,
    pub email_addresses: Vec<String>,
    pub template_ids: Vec<Uuid>,
}

/// Error type for notification attempts.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Failed to serialize event payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to publish event: {0}")]
    Publish(String),
}

/// Recipient of campaign lifecycle notifications.
#[async_trait::async_trait]
pub trait EventNotifier: Send + Sync {
    /// Notify that a campaign was launched.
    async fn notify_campaign_launched(
        &self,
        event: CampaignLaunchedEvent,
    ) -> Result<(), NotifyError>;
}

/// Notifier that logs events instead of publishing them.
///
/// Stands in for the message-bus publisher until one is wired up.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl EventNotifier for LogNotifier {
    async fn notify_campaign_launched(
        &self,
        event: CampaignLaunchedEvent,
    ) -> Result<(), NotifyError> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(
            campaign_id = %event.campaign_id,
            organization_id = %event.organization_id,
            recipients = event.email_addresses.len(),
            templates = event.template_ids.len(),
            payload = %payload,
            "campaign.launched"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_accepts_event() {
        let notifier = LogNotifier::new();
        let event = CampaignLaunchedEvent {
            campaign_id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            email_addresses: vec!["ada@example.com".to_string()],
            template_ids: vec![Uuid::new_v4()],
        };
        assert!(notifier.notify_campaign_launched(event).await.is_ok());
    }

    #[test]
    fn test_event_serializes_snake_case() {
        let event = CampaignLaunchedEvent {
            campaign_id: Uuid::nil(),
            organization_id: Uuid::nil(),
            email_addresses: vec![],
            template_ids: vec![],
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("campaign_id").is_some());
        assert!(json.get("email_addresses").is_some());
    }
}
