use serde::{Deserialize, Serialize};

/// Fixed greeting served by the root route of both services.
pub const GREETING: &str = "Hello World! This is from Container Deployed using Terraform";

/// Credentials submitted to the authenticate endpoint.
///
/// Both fields default to `None` so a body with a missing field still
/// deserializes; the handler treats absent fields as wrong credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Successful login response carrying the static demo token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body returned on a failed login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_deserialization() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":"Ameet","password":"Parse"}"#).unwrap();

        assert_eq!(req.username.as_deref(), Some("Ameet"));
        assert_eq!(req.password.as_deref(), Some("Parse"));
    }

    #[test]
    fn test_login_request_missing_fields_default_to_none() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"Ameet"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("Ameet"));
        assert!(req.password.is_none());

        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_login_request_null_fields() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username":null,"password":null}"#).unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn test_login_response_serialization() {
        let resp = LoginResponse {
            token: "some-token-value".to_string(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"token":"some-token-value"}"#);
    }

    #[test]
    fn test_login_error_serialization() {
        let err = LoginError {
            error: "Invalid username or password".to_string(),
        };

        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error":"Invalid username or password"}"#);
    }
}
