//! # mrkt-name
//!
//! Hierarchical resource-name formats, parsing, and validation for the
//! mrkt platform.
//!
//! ## Design Principles
//!
//! - Names are path-like and hierarchical; ids are opaque UUIDs
//! - Each resource type's template is compiled once and reused process-wide
//! - Names support roundtrip use (parse → generate → parse)
//! - Parsing is all-or-nothing with a precise failure reason
//!
//! ## Name Format
//!
//! A name alternates collection segments and resource-id segments:
//! `{collection}/{uuid}`, repeated once per level of nesting.
//!
//! Examples:
//! - `users/9279dd19-1b56-4b38-b8e7-532cdd161c61`
//! - `stores/6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15`
//! - `stores/6729f7fa-dc5a-41ae-b00d-5cd67d5e1e15/products/90e3eaaa-4d9c-423f-b468-bb7322fb5d4f`
//!
//! This format provides:
//! - Self-describing hierarchy (every id is preceded by its collection)
//! - A single string key for any resource (routing, storage, logging)
//! - Parent derivation without extra lookups
//! - Strict validation (canonical lowercase UUIDs only)

mod bindings;
mod error;
mod format;
mod grammar;
mod id;
mod macros;
mod resources;
mod segment;

pub use bindings::Bindings;
pub use error::NameError;
pub use format::Format;
pub use grammar::{is_collection_id, is_resource_id};
pub use id::{CollectionId, ResourceId};
pub use resources::*;
pub use segment::Segment;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
