//! Directory store: all persistence operations for clients and phones.

use sqlx::PgPool;
use tracing::debug;

use crate::entities::{ClientEntity, DirectoryEntryEntity, PhoneEntity};
use crate::error::StoreError;
use crate::metrics::QueryTimer;
use crate::schema;

/// Result of a client deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The delete was issued; carries the number of rows removed (zero when
    /// the id matched nothing).
    Deleted(u64),
    /// The client still owns at least one phone; the delete was refused.
    /// Carries the phone number found by the probe.
    HasPhones(String),
}

/// Repository for client and phone persistence, plus denormalized search.
///
/// Every mutating operation commits individually; there is no batching
/// across calls.
#[derive(Clone)]
pub struct DirectoryStore {
    pool: PgPool,
}

impl DirectoryStore {
    /// Creates a new DirectoryStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the client and phone tables if absent. Idempotent.
    pub async fn create_schema(&self) -> Result<(), StoreError> {
        let timer = QueryTimer::new("create_schema");
        sqlx::query(schema::CREATE_CLIENT_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(schema::CREATE_PHONE_TABLE)
            .execute(&self.pool)
            .await?;
        timer.record();
        debug!("directory schema ensured");
        Ok(())
    }

    /// Drop both tables unconditionally.
    ///
    /// Unlike [`create_schema`](Self::create_schema) this is not guarded:
    /// dropping an absent schema propagates the database error. Callers own
    /// the ordering.
    pub async fn drop_schema(&self) -> Result<(), StoreError> {
        let timer = QueryTimer::new("drop_schema");
        sqlx::query(schema::DROP_TABLES).execute(&self.pool).await?;
        timer.record();
        debug!("directory schema dropped");
        Ok(())
    }

    /// Insert a new client and return the created row.
    ///
    /// An empty, duplicate, or non-ASCII mail surfaces as
    /// [`StoreError::ConstraintViolation`].
    pub async fn add_client(
        &self,
        firstname: Option<&str>,
        lastname: Option<&str>,
        mail: &str,
    ) -> Result<ClientEntity, StoreError> {
        let timer = QueryTimer::new("add_client");
        let client = sqlx::query_as::<_, ClientEntity>(
            r#"
            INSERT INTO client (firstname, lastname, mail)
            VALUES ($1, $2, $3)
            RETURNING id, firstname, lastname, mail
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .bind(mail)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(client)
    }

    /// Insert a new phone bound to an existing client and return the row.
    ///
    /// A duplicate or out-of-pattern number surfaces as
    /// [`StoreError::ConstraintViolation`]; a `client_id` with no matching
    /// client surfaces as [`StoreError::ForeignKeyViolation`].
    pub async fn add_phone(
        &self,
        number: &str,
        client_id: i32,
    ) -> Result<PhoneEntity, StoreError> {
        let timer = QueryTimer::new("add_phone");
        let phone = sqlx::query_as::<_, PhoneEntity>(
            r#"
            INSERT INTO phone (number, client_id)
            VALUES ($1, $2)
            RETURNING id, number, client_id
            "#,
        )
        .bind(number)
        .bind(client_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(phone)
    }

    /// Replace all three mutable fields of a client.
    ///
    /// Returns the number of rows affected. An unknown `client_id` is a
    /// silent zero-row no-op, not an error.
    pub async fn update_client(
        &self,
        firstname: Option<&str>,
        lastname: Option<&str>,
        mail: &str,
        client_id: i32,
    ) -> Result<u64, StoreError> {
        let timer = QueryTimer::new("update_client");
        let result = sqlx::query(
            r#"
            UPDATE client
            SET firstname = $1, lastname = $2, mail = $3
            WHERE id = $4
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .bind(mail)
        .bind(client_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Replace the number of a phone record.
    ///
    /// Same zero-row no-op semantics as [`update_client`](Self::update_client).
    pub async fn update_phone(&self, number: &str, phone_id: i32) -> Result<u64, StoreError> {
        let timer = QueryTimer::new("update_phone");
        let result = sqlx::query(
            r#"
            UPDATE phone
            SET number = $1
            WHERE id = $2
            "#,
        )
        .bind(number)
        .bind(phone_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Remove a phone record. No-op if absent.
    pub async fn delete_phone(&self, phone_id: i32) -> Result<u64, StoreError> {
        let timer = QueryTimer::new("delete_phone");
        let result = sqlx::query(
            r#"
            DELETE FROM phone
            WHERE id = $1
            "#,
        )
        .bind(phone_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Delete a client unless it still owns a phone number.
    ///
    /// The probe reads the first joined phone number for the id. A missing
    /// client, a client with no phones, and a client whose first phone row
    /// carries a null number all probe as phone-free, and the delete
    /// proceeds in each case. Kept for fidelity with the reference
    /// behavior; see DESIGN.md.
    pub async fn delete_client(&self, client_id: i32) -> Result<DeleteOutcome, StoreError> {
        let timer = QueryTimer::new("delete_client");

        let number = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT number FROM client
            LEFT JOIN phone ON client.id = phone.client_id
            WHERE client.id = $1
            "#,
        )
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await?
        .flatten();

        if let Some(number) = number {
            timer.record();
            return Ok(DeleteOutcome::HasPhones(number));
        }

        let result = sqlx::query(
            r#"
            DELETE FROM client
            WHERE id = $1
            "#,
        )
        .bind(client_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(DeleteOutcome::Deleted(result.rows_affected()))
    }

    /// Search clients by exact first name.
    ///
    /// Each client row is joined with each of its phone numbers; a client
    /// with no phones yields one row with a null number. No ordering clause
    /// is applied; rows arrive in engine order.
    pub async fn search_by_firstname(
        &self,
        firstname: &str,
    ) -> Result<Vec<DirectoryEntryEntity>, StoreError> {
        let timer = QueryTimer::new("search_by_firstname");
        let entries = sqlx::query_as::<_, DirectoryEntryEntity>(
            r#"
            SELECT client.id, firstname, lastname, mail, number FROM client
            LEFT JOIN phone ON client.id = phone.client_id
            WHERE firstname = $1
            "#,
        )
        .bind(firstname)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(entries)
    }

    /// Search clients by exact last name.
    pub async fn search_by_lastname(
        &self,
        lastname: &str,
    ) -> Result<Vec<DirectoryEntryEntity>, StoreError> {
        let timer = QueryTimer::new("search_by_lastname");
        let entries = sqlx::query_as::<_, DirectoryEntryEntity>(
            r#"
            SELECT client.id, firstname, lastname, mail, number FROM client
            LEFT JOIN phone ON client.id = phone.client_id
            WHERE lastname = $1
            "#,
        )
        .bind(lastname)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(entries)
    }

    /// Search clients by exact mail address. Mail is unique, so this
    /// matches at most one client, but still one row per phone.
    pub async fn search_by_mail(
        &self,
        mail: &str,
    ) -> Result<Vec<DirectoryEntryEntity>, StoreError> {
        let timer = QueryTimer::new("search_by_mail");
        let entries = sqlx::query_as::<_, DirectoryEntryEntity>(
            r#"
            SELECT client.id, firstname, lastname, mail, number FROM client
            LEFT JOIN phone ON client.id = phone.client_id
            WHERE mail = $1
            "#,
        )
        .bind(mail)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(entries)
    }

    /// Search clients by exact phone number.
    pub async fn search_by_phone(
        &self,
        number: &str,
    ) -> Result<Vec<DirectoryEntryEntity>, StoreError> {
        let timer = QueryTimer::new("search_by_phone");
        let entries = sqlx::query_as::<_, DirectoryEntryEntity>(
            r#"
            SELECT client.id, firstname, lastname, mail, number FROM client
            LEFT JOIN phone ON client.id = phone.client_id
            WHERE number = $1
            "#,
        )
        .bind(number)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    // DirectoryStore methods require a database connection and are covered
    // by tests/store_integration.rs.
}
