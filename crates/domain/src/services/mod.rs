//! Domain services for SendPulse.
//!
//! Services contain business logic that operates on domain models.

pub mod events;

pub use events::{CampaignLaunchedEvent, EventNotifier, LogNotifier, NotifyError};
