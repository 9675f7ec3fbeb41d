//! Domain layer for the contacts directory.
//!
//! This crate contains:
//! - Domain models (Client, Phone, DirectoryEntry)
//! - Presentation formatting for search results

pub mod models;
