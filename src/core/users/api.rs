//! Users API endpoints
//!
//! - POST /api/users/signup - Register a new user
//!
//! Every failure answers with a JSON body `{"error": "..."}` so the client can
//! show the message verbatim.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;

use crate::core::form::FormInputs;
use crate::core::signup::SIGNUP_ENDPOINT;
use crate::core::users::{UserError, UserResponse, UserService};

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Convert UserError to API response
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match &self {
            UserError::MissingFields | UserError::AlreadyExists | UserError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            UserError::SignupsClosed => StatusCode::FORBIDDEN,
            UserError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ApiError::new(self.to_string()))).into_response()
    }
}

/// Create the users API router
pub fn users_api_router(service: UserService) -> Router {
    Router::new()
        .route(SIGNUP_ENDPOINT, post(signup_handler))
        .with_state(service)
}

/// POST /api/users/signup
/// Register a new user and return the public record
async fn signup_handler(
    State(service): State<UserService>,
    payload: Result<Json<FormInputs>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), UserError> {
    let Json(request) = payload.map_err(|e| UserError::InvalidBody(e.body_text()))?;

    tracing::info!("Signup attempt for username: {}", request.username);

    let user = service.signup(request).await.inspect_err(|e| {
        tracing::warn!("Signup rejected: {}", e);
    })?;

    tracing::info!("User registered successfully: {}", user.username);

    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn request() -> FormInputs {
        FormInputs {
            name: "Test User".to_string(),
            username: "tester".to_string(),
            email: "t@example.com".to_string(),
            password: "Password123".to_string(),
        }
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            UserError::AlreadyExists.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::MissingFields.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::InvalidBody("bad".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::SignupsClosed.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            UserError::InternalError("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_serialization() {
        let json = serde_json::to_value(ApiError::new("User already exists")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "User already exists"}));
    }

    #[tokio::test]
    async fn test_signup_handler_creates_user() {
        let service = UserService::new(4, true);

        let (status, Json(user)) = signup_handler(State(service.clone()), Ok(Json(request())))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user.username, "tester");
        assert_eq!(service.len(), 1);
    }

    #[tokio::test]
    async fn test_signup_handler_reports_duplicate() {
        let service = UserService::new(4, true);
        signup_handler(State(service.clone()), Ok(Json(request())))
            .await
            .unwrap();

        let result = signup_handler(State(service), Ok(Json(request()))).await;
        assert!(matches!(result, Err(UserError::AlreadyExists)));
    }

    async fn post_signup(app: Router, body: &'static str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(SIGNUP_ENDPOINT)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_router_rejects_malformed_body_with_error_json() {
        let service = UserService::new(4, true);
        let app = users_api_router(service.clone());

        let (status, body) = post_signup(app, "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid request body: "));
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_router_rejects_body_missing_fields() {
        let app = users_api_router(UserService::new(4, true));

        let (status, body) = post_signup(app, r#"{"name": "a"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request body: "));
    }

    #[tokio::test]
    async fn test_router_serves_signup_endpoint() {
        let app = users_api_router(UserService::new(4, true));

        let (status, body) = post_signup(
            app,
            r#"{"name":"Test User","username":"tester","email":"t@example.com","password":"Password123"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["username"], "tester");
        assert!(body["_id"].is_string());
        assert!(body["createdAt"].is_string());
        assert!(body.get("error").is_none());
    }
}
