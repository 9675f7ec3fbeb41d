//! Repository implementations.

pub mod directory;

pub use directory::{DeleteOutcome, DirectoryStore};
