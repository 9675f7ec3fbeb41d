//! Persistence layer for the contacts directory.
//!
//! This crate contains:
//! - Database connection management
//! - Schema definitions (DDL)
//! - Entity definitions (database row mappings)
//! - The directory store repository

pub mod db;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod repositories;
pub mod schema;

pub use error::StoreError;
pub use repositories::directory::{DeleteOutcome, DirectoryStore};
