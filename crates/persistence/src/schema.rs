//! Schema definitions for the directory tables.
//!
//! The CHECK patterns are kept byte-for-byte from the reference schema.
//! `^[+-9]*$` on phone.number is an ASCII range from '+' through '9', so it
//! also admits ',', '-', '.', and '/'. Left as-is; see DESIGN.md.

/// DDL for the client table. Mail is unique and printable-ASCII only.
pub const CREATE_CLIENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS client(
    id SERIAL PRIMARY KEY,
    firstname VARCHAR(40),
    lastname VARCHAR(40),
    mail VARCHAR(40) UNIQUE NOT NULL,
    CHECK (mail ~ '^[ -~]*$')
);
"#;

/// DDL for the phone table. A phone cannot exist without an owning client.
pub const CREATE_PHONE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS phone(
    id SERIAL PRIMARY KEY,
    number VARCHAR(12) UNIQUE,
    client_id INTEGER NOT NULL REFERENCES client(id),
    CHECK (number ~ '^[+-9]*$')
);
"#;

/// Unconditional drop of both tables. Fails if either is absent.
pub const DROP_TABLES: &str = "DROP TABLE client, phone;";
