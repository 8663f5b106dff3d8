//! Data Transfer Objects for REST request/response serialization.
//!
//! Advert submissions and records are exchanged in their domain form;
//! only the create response and the confirmation request have a
//! transport-specific shape.

pub mod advert_dto;

pub use advert_dto::*;
