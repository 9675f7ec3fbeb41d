//! Client entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the client table.
#[derive(Debug, Clone, FromRow)]
pub struct ClientEntity {
    pub id: i32,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub mail: String,
}

impl From<ClientEntity> for domain::models::Client {
    fn from(entity: ClientEntity) -> Self {
        Self {
            id: entity.id,
            firstname: entity.firstname,
            lastname: entity.lastname,
            mail: entity.mail,
        }
    }
}
