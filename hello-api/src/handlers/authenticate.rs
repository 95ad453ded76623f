use crate::error::{ApiError, ApiResult};
use axum::Json;
use common::{LoginRequest, LoginResponse};

// Hardcoded demo credentials and token, kept verbatim from the deployment
// demo contract. Not real authentication.
const DEMO_USERNAME: &str = "Ameet";
const DEMO_PASSWORD: &str = "Parse";
const DEMO_TOKEN: &str = "some-token-value";

/// Authenticate handler - checks credentials against the hardcoded pair
///
/// The body extractor is optional so a missing or malformed body takes the
/// same 401 path as wrong credentials instead of a framework 4xx.
pub async fn authenticate_handler(
    req: Option<Json<LoginRequest>>,
) -> ApiResult<Json<LoginResponse>> {
    let (username, password) = match req {
        Some(Json(req)) => (req.username, req.password),
        None => (None, None),
    };

    if username.as_deref() == Some(DEMO_USERNAME) && password.as_deref() == Some(DEMO_PASSWORD) {
        tracing::info!("Successful login for user: {}", DEMO_USERNAME);
        Ok(Json(LoginResponse {
            token: DEMO_TOKEN.to_string(),
        }))
    } else {
        tracing::warn!("Failed login attempt for user: {:?}", username);
        Err(ApiError::InvalidCredentials)
    }
}
