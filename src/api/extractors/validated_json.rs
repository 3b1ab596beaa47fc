//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Both malformed bodies and failed rules become a 400 with a plain-text
/// message.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use grocery_api::api::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct NewCategoryRequest {
///     #[validate(required(message = "Category is required"))]
///     category: Option<String>,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<NewCategoryRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string.
///
/// Several rules on one field may share a message; it is reported once.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let mut messages: Vec<String> = Vec::new();
    for (field, errs) in fields {
        for e in errs {
            let message = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }

    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Sample {
        #[validate(
            required(message = "Name is required"),
            length(min = 1, message = "Name is required")
        )]
        name: Option<String>,
    }

    #[test]
    fn test_missing_and_empty_share_message() {
        let missing = Sample { name: None }.validate().unwrap_err();
        assert_eq!(format_validation_errors(&missing), "Name is required");

        let empty = Sample {
            name: Some(String::new()),
        }
        .validate()
        .unwrap_err();
        assert_eq!(format_validation_errors(&empty), "Name is required");

        assert!(Sample {
            name: Some("kale".into())
        }
        .validate()
        .is_ok());
    }
}
