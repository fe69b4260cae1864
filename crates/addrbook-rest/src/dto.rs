//! Request and response bodies.

use addrbook_config::AppMetadata;
use addrbook_core::rules::{not_blank, phone_number};
use addrbook_core::{ContactPhone, ContactToSave, PhoneType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A phone number in a create or update request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactPhoneRequest {
    pub phone_type: PhoneType,
    #[validate(custom(function = phone_number, message = "must contain digits and only + - . ( ) or spaces"))]
    pub phone_number: String,
}

/// Body of `POST /api/contacts` and `PUT /api/contacts/{id}`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactToSaveRequest {
    #[validate(
        custom(function = not_blank, message = "must not be blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub first_name: String,
    #[validate(
        custom(function = not_blank, message = "must not be blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub last_name: String,
    #[serde(default)]
    #[validate(nested)]
    pub phones: Vec<ContactPhoneRequest>,
}

impl From<ContactToSaveRequest> for ContactToSave {
    fn from(request: ContactToSaveRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            phones: request
                .phones
                .into_iter()
                .map(|p| ContactPhone::new(p.phone_type, p.phone_number))
                .collect(),
        }
    }
}

/// Body of `GET /api/version`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    pub service: String,
    pub version: String,
    pub build: String,
}

impl From<&AppMetadata> for VersionResponse {
    fn from(app: &AppMetadata) -> Self {
        Self {
            service: app.name.clone(),
            version: app.version.clone(),
            build: app.build.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> ContactToSaveRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_request_converts() {
        let req = request(
            r#"{"first_name":"Ann","last_name":"Lee","phones":[{"phone_type":"mobile","phone_number":"123"}]}"#,
        );
        assert!(req.validate().is_ok());

        let to_save = ContactToSave::from(req);
        assert_eq!(to_save.first_name, "Ann");
        assert_eq!(to_save.phones, vec![ContactPhone::new(PhoneType::Mobile, "123")]);
    }

    #[test]
    fn test_phones_default_to_empty() {
        let req = request(r#"{"first_name":"Ann","last_name":"Lee"}"#);
        assert!(req.validate().is_ok());
        assert!(req.phones.is_empty());
    }

    #[test]
    fn test_blank_name_and_bad_phone_are_rejected() {
        let req = request(
            r#"{"first_name":"  ","last_name":"Lee","phones":[{"phone_type":"work","phone_number":"n/a"}]}"#,
        );

        let mut fields: Vec<String> = addrbook_core::field_errors(&req.validate().unwrap_err())
            .into_iter()
            .map(|e| e.field)
            .collect();
        fields.sort();
        assert_eq!(fields, ["first_name", "phones[0].phone_number"]);
    }
}
