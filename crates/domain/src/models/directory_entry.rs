//! Denormalized search result row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a directory search: client fields joined with one phone number.
///
/// A client with N phones produces N entries; a client with no phones
/// produces a single entry with `number` set to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: i32,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub mail: String,
    pub number: Option<String>,
}

/// Renders an optional field the way the reference output does: absent
/// values print as the literal `None`.
fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

impl fmt::Display for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}, {}, {}",
            self.id,
            opt(&self.firstname),
            opt(&self.lastname),
            self.mail,
            opt(&self.number)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(number: Option<&str>) -> DirectoryEntry {
        DirectoryEntry {
            id: 1,
            firstname: Some("Ivan".to_string()),
            lastname: Some("Ivanov".to_string()),
            mail: "iivanov1987@mail.ru".to_string(),
            number: number.map(|n| n.to_string()),
        }
    }

    #[test]
    fn test_display_with_phone() {
        assert_eq!(
            entry(Some("5553307")).to_string(),
            "1 - Ivan Ivanov, iivanov1987@mail.ru, 5553307"
        );
    }

    #[test]
    fn test_display_without_phone() {
        assert_eq!(
            entry(None).to_string(),
            "1 - Ivan Ivanov, iivanov1987@mail.ru, None"
        );
    }

    #[test]
    fn test_display_without_names() {
        let e = DirectoryEntry {
            id: 3,
            firstname: None,
            lastname: None,
            mail: "anon@example.com".to_string(),
            number: Some("777888".to_string()),
        };
        assert_eq!(e.to_string(), "3 - None None, anon@example.com, 777888");
    }
}
