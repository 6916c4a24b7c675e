//! # Notes System Core
//!
//! Shared types and traits for the notes backend.
//!
//! This crate provides:
//! - The `Note` record type exchanged between the store and the HTTP layer
//! - The `SummaryProvider` trait implemented by external summarizers

pub mod traits;
pub mod types;

pub use traits::SummaryProvider;
pub use types::Note;
