//! HTTP Auth Gateway

use crate::domain::credential::{Credential, SessionToken};
use crate::domain::repository::{AuthGateway, LoginCredentials, RegisterData};
use crate::domain::user::UserProfile;
use crate::error::{SessionError, SessionResult};
use platform::http::{ApiClient, HttpError};
use reqwest::Method;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Auth gateway over the platform REST API
#[derive(Clone)]
pub struct HttpAuthGateway {
    api: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Wire shape of /api/auth/login and /api/auth/register responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    user: UserProfile,
    session_id: String,
}

fn into_credential(value: Value) -> SessionResult<Credential> {
    let response: AuthResponse = serde_json::from_value(value)?;
    let token = SessionToken::new(response.session_id).ok_or_else(|| {
        SessionError::Validation("Server returned an empty session token".to_string())
    })?;
    Ok(Credential::new(token, response.user))
}

impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &LoginCredentials) -> SessionResult<Credential> {
        let body = json!({
            "username": credentials.username,
            "password": credentials.password,
        });

        match self.api.send_json(Method::POST, "/api/auth/login", &body).await {
            Ok(value) => into_credential(value),
            Err(HttpError::Status { status: 401, .. }) => Err(SessionError::InvalidCredentials),
            Err(e) => Err(e.into()),
        }
    }

    async fn register(&self, data: &RegisterData) -> SessionResult<Credential> {
        let body = json!({
            "username": data.username,
            "email": data.email,
            "password": data.password,
            "confirmPassword": data.confirm_password,
            "referredBy": data.referred_by,
        });

        match self
            .api
            .send_json(Method::POST, "/api/auth/register", &body)
            .await
        {
            Ok(value) => into_credential(value),
            Err(HttpError::Status { status: 409, body }) => Err(SessionError::Validation(body)),
            Err(e) => Err(e.into()),
        }
    }

    async fn logout(&self) -> SessionResult<()> {
        self.api
            .send_empty(Method::POST, "/api/auth/logout")
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> SessionResult<UserProfile> {
        let value = self.api.get_json("/api/user").await?;
        Ok(serde_json::from_value(value)?)
    }
}
