//! Request body extractor that deserializes JSON and runs `validator` rules.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::AppError;

/// Like [`axum::Json`], but rejects with 400 when the body is malformed or
/// fails its `#[validate(...)]` rules.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateTour>) -> AppResult<...> { .. }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value
            .validate()
            .map_err(|errors| AppError::BadRequest(validation_message(&errors)))?;
        Ok(ValidatedJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

/// Flatten validation errors into one `field: message` line per failure,
/// sorted by field name so the output is stable.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_messages(errors, "", &mut parts);
    parts.sort();
    parts.join("; ")
}

fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", error.code));
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, nested) in items {
                    collect_messages(nested, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}
