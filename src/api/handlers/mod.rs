//! REST endpoint handlers organized by resource.

pub mod advert;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/adverts/v1`.
pub fn routes() -> Router<AppState> {
    Router::new().merge(advert::routes())
}
