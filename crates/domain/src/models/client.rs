//! Client domain model.

use serde::{Deserialize, Serialize};

/// A contact record: optional name parts plus a unique mail address.
///
/// The mail address is constrained to printable ASCII and is unique across
/// the whole directory; name fields may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i32,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub mail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_serde_round_trip() {
        let client = Client {
            id: 1,
            firstname: Some("Ivan".to_string()),
            lastname: Some("Ivanov".to_string()),
            mail: "iivanov1987@mail.ru".to_string(),
        };

        let json = serde_json::to_string(&client).expect("serialize");
        let back: Client = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, client);
    }

    #[test]
    fn test_client_optional_names_deserialize_as_none() {
        let json = r#"{"id":7,"firstname":null,"lastname":null,"mail":"x@y.z"}"#;
        let client: Client = serde_json::from_str(json).expect("deserialize");
        assert_eq!(client.firstname, None);
        assert_eq!(client.lastname, None);
        assert_eq!(client.mail, "x@y.z");
    }
}
