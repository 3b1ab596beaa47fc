//! Authentication handlers for both identity spaces.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_ADMIN_REGISTERED, MSG_USER_REGISTERED};
use crate::domain::{AccountKind, AccountResponse};
use crate::errors::{AppError, AppResult};
use crate::services::Registration;
use crate::types::{Created, MessageResponse};

/// Registration request (admin and user alike)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[schema(example = "Jane")]
    pub firstname: String,
    #[serde(default)]
    #[schema(example = "Doe")]
    pub lastname: String,
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username is required")
    )]
    #[schema(example = "jane")]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            firstname: request.firstname,
            lastname: request.lastname,
            username: request.username.unwrap_or_default(),
            email: request.email,
            password: request.password,
        }
    }
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Successful admin login
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub admin: AccountResponse,
    pub token: String,
}

/// Successful user login
#[derive(Debug, Serialize, ToSchema)]
pub struct UserLoginResponse {
    pub user: AccountResponse,
    pub token: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/register", post(register_admin))
        .route("/admin/login", post(login_admin))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}

async fn register(
    state: &AppState,
    kind: AccountKind,
    payload: RegisterRequest,
) -> AppResult<AccountResponse> {
    state
        .auth_service
        .register(kind, payload.into())
        .await
        .map_err(AppError::into_registration_failure)
}

/// Register a new admin
#[utoipa::path(
    post,
    path = "/admin/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Admin registered", body = MessageResponse),
        (status = 400, description = "Missing username or password, or username taken", body = String, content_type = "text/plain"),
        (status = 500, description = "Registration failed")
    )
)]
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<MessageResponse>> {
    register(&state, AccountKind::Admin, payload).await?;
    Ok(Created(MessageResponse::new(MSG_ADMIN_REGISTERED)))
}

/// Admin login
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid email or password", body = MessageResponse)
    )
)]
pub async fn login_admin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    let session = state
        .auth_service
        .login(AccountKind::Admin, payload.email, payload.password)
        .await?;

    Ok(Json(AdminLoginResponse {
        admin: session.account,
        token: session.token,
    }))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing username or password, or username taken", body = String, content_type = "text/plain"),
        (status = 500, description = "Registration failed")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<MessageResponse>> {
    register(&state, AccountKind::User, payload).await?;
    Ok(Created(MessageResponse::new(MSG_USER_REGISTERED)))
}

/// User login
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserLoginResponse),
        (status = 401, description = "Invalid email or password", body = MessageResponse)
    )
)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserLoginResponse>> {
    let session = state
        .auth_service
        .login(AccountKind::User, payload.email, payload.password)
        .await?;

    Ok(Json(UserLoginResponse {
        user: session.account,
        token: session.token,
    }))
}
