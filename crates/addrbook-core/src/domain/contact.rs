//! Contact entity and its write-side variant.

use crate::ContactId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a contact phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Mobile,
    Home,
    Work,
}

impl PhoneType {
    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Home => "home",
            Self::Work => "work",
        }
    }
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single phone number of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactPhone {
    pub phone_type: PhoneType,
    pub phone_number: String,
}

impl ContactPhone {
    #[must_use]
    pub fn new(phone_type: PhoneType, phone_number: impl Into<String>) -> Self {
        Self {
            phone_type,
            phone_number: phone_number.into(),
        }
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    /// Ordered as submitted.
    pub phones: Vec<ContactPhone>,
}

impl Contact {
    /// Builds a contact from its write-side form and an identity.
    #[must_use]
    pub fn from_saved(id: ContactId, to_save: ContactToSave) -> Self {
        Self {
            id,
            first_name: to_save.first_name,
            last_name: to_save.last_name,
            phones: to_save.phones,
        }
    }
}

/// Write-side contact without an identity.
///
/// The identity is assigned by persistence on create and taken from the path
/// on update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactToSave {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phones: Vec<ContactPhone>,
}

impl ContactToSave {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phones: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_phone(mut self, phone_type: PhoneType, phone_number: impl Into<String>) -> Self {
        self.phones.push(ContactPhone::new(phone_type, phone_number));
        self
    }
}
