//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::{ConfirmAdvertRequest, CreateAdvertResponse};
use crate::api::handlers::{advert, system};
use crate::domain::{AdvertId, AdvertRecord, AdvertStatus, AdvertSubmission};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "advert-api",
        description = "Advert lifecycle: pending creation, confirmation, activation notifications."
    ),
    paths(
        advert::create_advert,
        advert::confirm_advert,
        advert::list_adverts,
        advert::get_advert,
        system::health_handler,
    ),
    components(schemas(
        AdvertId,
        AdvertStatus,
        AdvertSubmission,
        AdvertRecord,
        CreateAdvertResponse,
        ConfirmAdvertRequest,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Adverts", description = "Advert creation, confirmation and lookup"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_advert_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/adverts/v1/create",
            "/adverts/v1/confirm",
            "/adverts/v1/all",
            "/adverts/v1/{id}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
