//! MySQL `ContactDao` implementation.

use crate::{dao::ContactDao, DatabasePoolInterface};
use addrbook_core::{AddrBookError, AddrBookResult, Contact, ContactId, ContactPhone};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL contact DAO.
pub struct MySqlContactDaoImpl {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlContactDaoImpl {
    /// Creates a new MySQL contact DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a contact.
#[derive(Debug, FromRow)]
struct ContactRow {
    id: String, // MySQL stores UUID as CHAR(36)
    first_name: String,
    last_name: String,
    phones: Json<Vec<ContactPhone>>,
}

impl TryFrom<ContactRow> for Contact {
    type Error = AddrBookError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| AddrBookError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Contact {
            id: ContactId::from_uuid(id),
            first_name: row.first_name,
            last_name: row.last_name,
            phones: row.phones.0,
        })
    }
}

#[async_trait]
impl ContactDao for MySqlContactDaoImpl {
    async fn find_all(&self) -> AddrBookResult<Vec<Contact>> {
        debug!("Selecting all contacts");

        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, phones
            FROM contacts
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn find_by_id(&self, id: ContactId) -> AddrBookResult<Option<Contact>> {
        debug!("Finding contact by id: {}", id);

        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, first_name, last_name, phones
            FROM contacts
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn insert(&self, contact: &Contact) -> AddrBookResult<()> {
        debug!("Inserting contact: {}", contact.id);

        sqlx::query(
            r#"
            INSERT INTO contacts (id, first_name, last_name, phones)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(contact.id.to_string())
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(Json(&contact.phones))
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn replace(&self, contact: &Contact) -> AddrBookResult<bool> {
        debug!("Replacing contact: {}", contact.id);

        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET first_name = ?, last_name = ?, phones = ?
            WHERE id = ?
            "#,
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(Json(&contact.phones))
        .bind(contact.id.to_string())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // An UPDATE that changes nothing reports zero affected rows; the row
        // may still exist.
        let exists: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM contacts WHERE id = ?")
            .bind(contact.id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(exists.is_some())
    }

    async fn delete(&self, id: ContactId) -> AddrBookResult<bool> {
        debug!("Deleting contact: {}", id);

        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlContactDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlContactDaoImpl").finish_non_exhaustive()
    }
}
