use super::AppState;
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use nullguard_core::{nesting_depth, ValidationResult};
use serde_json::Value;

pub const PATH: &str = "/api/v1/json/validate";

/// `POST /api/v1/json/validate`: 200 when no offending nulls, 400 with the
/// offending paths otherwise. The body must be a JSON object.
#[tracing::instrument(name = "validate_json", skip_all)]
pub async fn validate_json(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ValidationResult>), ApiError> {
    let Json(data) = payload?;
    if !data.is_object() {
        return Err(ApiError::NotAnObject {
            kind: value_kind(&data),
        });
    }

    if state.max_depth > 0 {
        let depth = nesting_depth(&data);
        if depth > state.max_depth {
            return Err(ApiError::DepthExceeded {
                depth,
                max: state.max_depth,
            });
        }
    }

    let result = state.validator.validate(&data);
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    tracing::info!(
        status = status.as_u16(),
        invalid = result.invalid_fields().len(),
        "validated document"
    );
    Ok((status, Json(result)))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
