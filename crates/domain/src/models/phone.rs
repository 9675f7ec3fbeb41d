//! Phone domain model.

use serde::{Deserialize, Serialize};

/// A phone-number record owned by exactly one client.
///
/// The number is unique across all phone records. The column itself is
/// nullable in the schema, so a row can exist with no number at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: i32,
    pub number: Option<String>,
    pub client_id: i32,
}
