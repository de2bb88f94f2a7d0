//! services/portal/src/adapters/gateway.rs
//!
//! This module contains the HTTP gateway adapter, the concrete implementation
//! of the `UserGateway` port from the `core` crate. It talks to the remote
//! user-management API using `reqwest`.

use async_trait::async_trait;
use serde::Deserialize;
use taskhive_core::domain::{AuthSession, Credentials, RegistrationRequest, User, VerificationRequest};
use taskhive_core::ports::{GatewayError, GatewayResult, UserGateway};
use tracing::error;
use url::Url;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An HTTP adapter that implements the `UserGateway` port.
///
/// Success is signaled by HTTP status 200 exactly; any other status, or a
/// transport failure, is a [`GatewayError`]. No retries, no caching, no
/// client-side timeout.
#[derive(Clone)]
pub struct HttpUserGateway {
    base_url: String,
    http: reqwest::Client,
}

impl HttpUserGateway {
    /// Creates a new `HttpUserGateway` rooted at the API's base URL.
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Accepts a response only when its status is exactly 200; otherwise
    /// extracts the server-supplied message, falling back to a generic one.
    async fn accept(response: reqwest::Response) -> GatewayResult<reqwest::Response> {
        let status = response.status().as_u16();
        if status == 200 {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(GatewayError::from_status(status, message))
    }

    fn transport_failure(operation: &str, err: &reqwest::Error) -> GatewayError {
        error!("Transport failure during {operation}: {err}");
        GatewayError::unexpected()
    }

    fn malformed_body(operation: &str, err: &reqwest::Error) -> GatewayError {
        error!("Malformed response body from {operation}: {err}");
        GatewayError::unexpected()
    }
}

//=========================================================================================
// "Impure" Wire Structs
//=========================================================================================

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct LoginBody {
    token: String,
    user: LoginUserBody,
}

#[derive(Deserialize)]
struct LoginUserBody {
    id: String,
}

impl LoginBody {
    fn to_domain(self) -> AuthSession {
        AuthSession {
            token: self.token,
            user_id: self.user.id,
        }
    }
}

#[derive(Deserialize)]
struct FetchUserBody {
    user: User,
}

//=========================================================================================
// `UserGateway` Trait Implementation
//=========================================================================================

#[async_trait]
impl UserGateway for HttpUserGateway {
    /// POST `/user/create` with the registration payload.
    async fn create_user(&self, request: &RegistrationRequest) -> GatewayResult<()> {
        let response = self
            .http
            .post(self.endpoint("/user/create"))
            .json(request)
            .send()
            .await
            .map_err(|e| Self::transport_failure("create_user", &e))?;
        Self::accept(response).await?;
        Ok(())
    }

    /// POST `/user/login`, normalizing the 200 body to the token/id pair.
    async fn login_user(&self, credentials: &Credentials) -> GatewayResult<AuthSession> {
        let response = self
            .http
            .post(self.endpoint("/user/login"))
            .json(credentials)
            .send()
            .await
            .map_err(|e| Self::transport_failure("login_user", &e))?;
        let body = Self::accept(response)
            .await?
            .json::<LoginBody>()
            .await
            .map_err(|e| Self::malformed_body("login_user", &e))?;
        Ok(body.to_domain())
    }

    /// PATCH `/user/verify-email` with the id and code.
    async fn verify_user(&self, request: &VerificationRequest) -> GatewayResult<()> {
        let response = self
            .http
            .patch(self.endpoint("/user/verify-email"))
            .json(request)
            .send()
            .await
            .map_err(|e| Self::transport_failure("verify_user", &e))?;
        Self::accept(response).await?;
        Ok(())
    }

    /// GET `/user/{id}` with a bearer token.
    async fn fetch_user(&self, user_id: &str, token: &str) -> GatewayResult<User> {
        let response = self
            .http
            .get(self.endpoint(&format!("/user/{user_id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Self::transport_failure("fetch_user", &e))?;
        let body = Self::accept(response)
            .await?
            .json::<FetchUserBody>()
            .await
            .map_err(|e| Self::malformed_body("fetch_user", &e))?;
        Ok(body.user)
    }
}
