//! Feedback handlers.

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{admin_auth_middleware, user_auth_middleware};
use crate::api::AppState;
use crate::domain::Feedback;
use crate::errors::AppResult;
use crate::services::UserIdentity;
use crate::types::Created;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FeedbackRequest {
    #[validate(
        required(message = "Message is required"),
        length(min = 1, message = "Message is required")
    )]
    #[schema(example = "Fast delivery, thanks!")]
    pub message: Option<String>,
}

/// Users submit feedback, admins read it
pub fn feedback_routes(state: &AppState) -> Router<AppState> {
    Router::new().route(
        "/feedback",
        get(list_feedback)
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                admin_auth_middleware,
            ))
            .merge(post(submit_feedback).route_layer(
                middleware::from_fn_with_state(state.clone(), user_auth_middleware),
            )),
    )
}

/// Submit feedback
#[utoipa::path(
    post,
    path = "/feedback",
    tag = "Feedback",
    request_body = FeedbackRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Feedback stored", body = Feedback),
        (status = 400, description = "Message is required", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid user token")
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    ValidatedJson(payload): ValidatedJson<FeedbackRequest>,
) -> AppResult<Created<Feedback>> {
    let feedback = state
        .feedback_service
        .submit(user.id, payload.message.unwrap_or_default())
        .await?;

    Ok(Created(feedback))
}

/// All feedback
#[utoipa::path(
    get,
    path = "/feedback",
    tag = "Feedback",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every feedback entry", body = Vec<Feedback>),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Invalid admin token")
    )
)]
pub async fn list_feedback(State(state): State<AppState>) -> AppResult<Json<Vec<Feedback>>> {
    Ok(Json(state.feedback_service.list().await?))
}
