//! HTTP service for the nullguard null-field check.
//!
//! Exposes a single route, `POST /api/v1/json/validate`, which runs
//! [`nullguard_core::NullFieldValidator`] over the request body.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | no offending nulls | 200 | `{"status":"success"}` |
//! | offending nulls | 400 | `{"status":"error","invalid_fields":[...]}` |
//! | body is not a JSON object | 422 | `{"status":"error","code":"E_NOT_AN_OBJECT","message":"..."}` |
//! | other rejected request | 400/413/415 | `{"status":"error","code":"E_...","message":"..."}` |
//!
//! Numbers outside the `f64` range (e.g. `1e400`) fail to parse and are
//! reported as `E_MALFORMED_BODY`.
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `NULLGUARD_BIND` | Listen address (default: `127.0.0.1:8000`) |
//! | `NULLGUARD_BODY_LIMIT` | Max request body in bytes (default: 2 MiB) |
//! | `NULLGUARD_MAX_DEPTH` | Max nesting depth, `0` disables (default: 64) |
//! | `NULLGUARD_OPTIONAL_FIELDS` | Comma-separated optional paths |
//!
//! `NULLGUARD_OPTIONAL_FIELDS` trims entries and drops empty ones, so it cannot
//! express the root path `""` or a path containing `,`. Use the YAML
//! `optional_fields` list for those.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::AppState;
pub use server::{ctrl_c, router, serve};
