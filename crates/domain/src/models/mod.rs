//! Domain model definitions.

pub mod client;
pub mod directory_entry;
pub mod phone;

pub use client::Client;
pub use directory_entry::DirectoryEntry;
pub use phone::Phone;
