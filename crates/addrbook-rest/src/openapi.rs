//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use crate::dto::{ContactPhoneRequest, ContactToSaveRequest, VersionResponse};
use addrbook_core::{Contact, ContactId, ContactPhone, ErrorResponse, FieldError, PhoneType};
use utoipa::OpenApi;

/// OpenAPI documentation for the address book API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Address Book API",
        version = "0.1.0",
        description = "Contact CRUD with a read-through cache"
    ),
    paths(
        crate::controllers::contact_controller::list_contacts,
        crate::controllers::contact_controller::create_contact,
        crate::controllers::contact_controller::get_contact,
        crate::controllers::contact_controller::update_contact,
        crate::controllers::contact_controller::delete_contact,
        crate::controllers::version_controller::get_version,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ContactId,
            Contact,
            ContactPhone,
            PhoneType,
            ContactToSaveRequest,
            ContactPhoneRequest,
            VersionResponse,
            HealthResponse,
            ReadinessResponse,
            ErrorResponse,
            FieldError,
        )
    ),
    tags(
        (name = "contacts", description = "Contact management endpoints"),
        (name = "meta", description = "Service metadata"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
