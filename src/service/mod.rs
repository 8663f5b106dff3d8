//! Service layer: advert lifecycle orchestration.
//!
//! [`AdvertStore`] enforces the advert state machine over a document store,
//! [`ConfirmationNotifier`] publishes activation messages, and
//! [`AdvertService`] sequences the two for callers.

pub mod advert_service;
pub mod advert_store;
pub mod notifier;

pub use advert_service::AdvertService;
pub use advert_store::AdvertStore;
pub use notifier::ConfirmationNotifier;
