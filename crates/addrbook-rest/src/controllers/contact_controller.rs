//! Contact management controller.

use crate::{
    dto::ContactToSaveRequest,
    extractors::ValidatedJson,
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use addrbook_core::{AddrBookError, Contact};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

/// Creates the contact router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route("/:id", get(get_contact).put(update_contact).delete(delete_contact))
}

/// List all contacts.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "All contacts", body = [Contact])
    )
)]
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Vec<Contact>> {
    debug!("List contacts request");

    let contacts = state.address_book.load_all_contacts().await?;
    ok(contacts)
}

/// Create a contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = ContactToSaveRequest,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactToSaveRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), AppError> {
    debug!("Create contact request: {} {}", request.first_name, request.last_name);

    let contact = state.address_book.add_contact(request.into()).await?;
    Ok(created(contact))
}

/// Get a contact by ID.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = Contact),
        (status = 404, description = "No such contact")
    )
)]
pub async fn get_contact(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Contact> {
    debug!("Get contact request: {}", id);

    let contact = state
        .address_book
        .load_contact_by_id(&id)
        .await?
        .ok_or_else(|| AddrBookError::not_found("Contact", &id))?;
    ok(contact)
}

/// Replace a contact.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact id")),
    request_body = ContactToSaveRequest,
    responses(
        (status = 200, description = "Contact as stored", body = Contact),
        (status = 404, description = "No such contact"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ContactToSaveRequest>,
) -> ApiResult<Contact> {
    debug!("Update contact request: {}", id);

    let contact = state
        .address_book
        .update_contact(&id, request.into())
        .await?
        .ok_or_else(|| AddrBookError::not_found("Contact", &id))?;
    ok(contact)
}

/// Delete a contact.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "No such contact")
    )
)]
pub async fn delete_contact(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, AppError> {
    debug!("Delete contact request: {}", id);

    if !state.address_book.delete_contact(&id).await? {
        return Err(AddrBookError::not_found("Contact", &id).into());
    }
    Ok(no_content())
}
