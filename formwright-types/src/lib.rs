//! Core types for the formwright crate.
//!
//! This crate provides the presentation-agnostic building blocks of a form:
//! - `Field`, `FieldKind` and `FieldId` - A single configurable question
//! - `Answers` - Raw text answers collected while taking a form
//! - `validate` and `validate_all` - The per-field validation engine
//! - `import_schema`, `export_schema` and `PublishedForm` - JSON interchange

mod field_id;
pub use field_id::FieldId;

mod field;
pub use field::{Field, FieldKind, FieldUpdate};

mod answers;
pub use answers::Answers;

mod validation;
pub use validation::{ValidationErrors, validate, validate_all};

mod schema;
pub use schema::{export_schema, import_schema};

mod published;
pub use published::{PublishedForm, PublishedQuestion};

mod error;
pub use error::{SchemaError, ValidationError};
