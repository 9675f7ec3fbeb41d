//! Phone entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the phone table.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneEntity {
    pub id: i32,
    pub number: Option<String>,
    pub client_id: i32,
}

impl From<PhoneEntity> for domain::models::Phone {
    fn from(entity: PhoneEntity) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            client_id: entity.client_id,
        }
    }
}
