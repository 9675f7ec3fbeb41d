//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod client;
pub mod directory_entry;
pub mod phone;

pub use client::ClientEntity;
pub use directory_entry::DirectoryEntryEntity;
pub use phone::PhoneEntity;
