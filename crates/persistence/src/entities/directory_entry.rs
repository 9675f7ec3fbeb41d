//! Search result entity: one client row joined with one phone number.

use sqlx::FromRow;

/// Database row mapping for the client LEFT JOIN phone search queries.
///
/// `number` is null when the client has no phones.
#[derive(Debug, Clone, FromRow)]
pub struct DirectoryEntryEntity {
    pub id: i32,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub mail: String,
    pub number: Option<String>,
}

impl From<DirectoryEntryEntity> for domain::models::DirectoryEntry {
    fn from(entity: DirectoryEntryEntity) -> Self {
        Self {
            id: entity.id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            mail: entity.mail,
            number: entity.number,
        }
    }
}
