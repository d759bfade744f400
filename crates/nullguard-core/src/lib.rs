//! Null-field detection for arbitrary JSON documents.
//!
//! The validator walks a [`serde_json::Value`] depth-first and records the
//! path of every `null` it finds, unless that exact path was declared
//! optional when the validator was built.
//!
//! # Quick Start
//!
//! ```
//! use nullguard_core::{NullFieldValidator, ValidationResult};
//! use serde_json::json;
//!
//! let validator = NullFieldValidator::new(["profile.nickname"]);
//! let doc = json!({
//!     "id": 7,
//!     "profile": { "nickname": null, "email": null },
//!     "tags": ["a", null]
//! });
//!
//! assert_eq!(
//!     validator.validate(&doc),
//!     ValidationResult::Error {
//!         invalid_fields: vec!["profile.email".into(), "tags[1]".into()],
//!     }
//! );
//! ```
//!
//! # Paths
//!
//! | Location | Path |
//! |----------|------|
//! | root | `""` |
//! | key `a` of the root object | `a` |
//! | key `b` below `a` | `a.b` |
//! | element 2 of array `a` | `a[2]` |
//!
//! See [`path`] for the known ambiguity with keys containing `.` or `[`.

pub mod optional;
pub mod path;
pub mod result;
pub mod validator;

pub use optional::OptionalFields;
pub use result::ValidationResult;
pub use validator::{nesting_depth, NullFieldValidator};
