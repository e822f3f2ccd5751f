//! Authorization boundary.
//!
//! Every org-scoped request passes through [`authorize`], which asks the
//! configured [`Authorizer`] for a decision before dispatch. The boundary
//! itself never hardwires a bypass; development deployments select the
//! [`AllowAll`] implementation through configuration.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;

use crate::app::AppState;
use crate::error::ApiError;

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(String),
}

/// Capability interface consulted before dispatch.
///
/// `subject` is the raw bearer token (or empty when absent), `resource`
/// the request path, and `action` the HTTP method.
#[async_trait::async_trait]
pub trait Authorizer: Send + Sync {
    async fn check(
        &self,
        subject: &str,
        resource: &str,
        action: &str,
    ) -> Result<Decision, ApiError>;
}

/// Authorizer that allows every request. Development only.
#[derive(Debug, Clone, Default)]
pub struct AllowAll;

#[async_trait::async_trait]
impl Authorizer for AllowAll {
    async fn check(
        &self,
        _subject: &str,
        _resource: &str,
        _action: &str,
    ) -> Result<Decision, ApiError> {
        Ok(Decision::Allow)
    }
}

/// JWT claims carried by bearer tokens.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// Permissions-service response for a user.
#[derive(Debug, Deserialize)]
struct PermissionsResponse {
    #[allow(dead_code)]
    user_id: String,
    #[allow(dead_code)]
    org_id: String,
    permissions: Vec<String>,
}

/// Authorizer that verifies the bearer token locally and resolves the
/// subject's permissions from an external permissions service.
pub struct RemoteAuthorizer {
    decoding_key: DecodingKey,
    permissions_url: String,
    client: reqwest::Client,
}

impl RemoteAuthorizer {
    pub fn new(jwt_secret: &str, permissions_url: String, timeout_secs: u64) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            permissions_url,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Permission string required for a resource/action pair, if any.
    ///
    /// Paths without a mapped permission are allowed for any
    /// authenticated subject.
    fn required_permission(resource: &str, action: &str) -> Option<String> {
        let noun = if resource.contains("/campaigns") {
            "campaign"
        } else if resource.contains("/templates") {
            "template"
        } else if resource.contains("/email-groups") {
            "email_group"
        } else if resource.contains("/email-addresses") {
            "email"
        } else {
            return None;
        };

        let verb = match action {
            "GET" => "read",
            "POST" => "create",
            "PATCH" | "PUT" => "update",
            "DELETE" => "delete",
            _ => return None,
        };

        Some(format!("{}:{}", noun, verb))
    }

    async fn fetch_permissions(
        &self,
        token: &str,
        subject: &str,
    ) -> Result<PermissionsResponse, ApiError> {
        let url = format!("{}/api/v1/users/{}/permissions", self.permissions_url, subject);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                ApiError::ServiceUnavailable(format!("Permissions service unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Unauthorized(format!(
                "Permissions service returned status {}",
                response.status()
            )));
        }

        response
            .json::<PermissionsResponse>()
            .await
            .map_err(|e| ApiError::Internal(format!("Invalid permissions response: {}", e)))
    }
}

#[async_trait::async_trait]
impl Authorizer for RemoteAuthorizer {
    async fn check(
        &self,
        subject: &str,
        resource: &str,
        action: &str,
    ) -> Result<Decision, ApiError> {
        if subject.is_empty() {
            return Ok(Decision::Deny("Missing authorization token".to_string()));
        }

        let token_data = decode::<Claims>(
            subject,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        let Some(required) = Self::required_permission(resource, action) else {
            return Ok(Decision::Allow);
        };

        let perms = self
            .fetch_permissions(subject, &token_data.claims.sub)
            .await?;

        if perms.permissions.iter().any(|p| p == &required) {
            Ok(Decision::Allow)
        } else {
            Ok(Decision::Deny(format!(
                "insufficient permissions: {} required",
                required
            )))
        }
    }
}

/// Middleware that consults the configured authorizer before dispatch.
pub async fn authorize(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or("")
        .to_string();

    let resource = req.uri().path().to_string();
    let action = req.method().as_str().to_string();

    match state.authorizer.check(&token, &resource, &action).await {
        Ok(Decision::Allow) => next.run(req).await,
        Ok(Decision::Deny(reason)) => ApiError::Forbidden(reason).into_response(),
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_permission_mapping() {
        assert_eq!(
            RemoteAuthorizer::required_permission(
                "/api/v1/organizations/abc/campaigns",
                "POST"
            ),
            Some("campaign:create".to_string())
        );
        assert_eq!(
            RemoteAuthorizer::required_permission(
                "/api/v1/organizations/abc/templates/xyz",
                "GET"
            ),
            Some("template:read".to_string())
        );
        assert_eq!(
            RemoteAuthorizer::required_permission(
                "/api/v1/organizations/abc/campaigns/xyz",
                "PATCH"
            ),
            Some("campaign:update".to_string())
        );
    }

    #[test]
    fn test_required_permission_unmapped_path() {
        assert_eq!(
            RemoteAuthorizer::required_permission("/api/v1/organizations", "GET"),
            None
        );
    }

    #[tokio::test]
    async fn test_allow_all_allows() {
        let authorizer = AllowAll;
        let decision = authorizer
            .check("", "/api/v1/organizations/abc/campaigns", "POST")
            .await
            .unwrap();
        assert_eq!(decision, Decision::Allow);
    }

    #[tokio::test]
    async fn test_remote_denies_missing_token() {
        let authorizer = RemoteAuthorizer::new("secret", "http://localhost:9".to_string(), 1);
        let decision = authorizer
            .check("", "/api/v1/organizations/abc/campaigns", "POST")
            .await
            .unwrap();
        assert!(matches!(decision, Decision::Deny(_)));
    }

    #[tokio::test]
    async fn test_remote_rejects_garbage_token() {
        let authorizer = RemoteAuthorizer::new("secret", "http://localhost:9".to_string(), 1);
        let result = authorizer
            .check("not-a-jwt", "/api/v1/organizations/abc/campaigns", "POST")
            .await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
