//! Domain layer: advert model, validation, and notification plumbing.
//!
//! This module contains the advert identity and record types, the
//! confirmation outcome, the submission validation policy, the message
//! sink collaborator trait and its in-process broadcast implementation.

pub mod advert;
pub mod advert_event;
pub mod advert_id;
pub mod event_bus;
pub mod message_sink;
pub mod validation;

pub use advert::{AdvertRecord, AdvertStatus, AdvertSubmission, ConfirmOutcome};
pub use advert_event::{AdvertConfirmedMessage, PublishedMessage};
pub use advert_id::AdvertId;
pub use event_bus::EventBus;
pub use message_sink::MessageSink;
pub use validation::ValidationPolicy;
