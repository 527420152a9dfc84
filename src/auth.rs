//! Admin authorisation for the report endpoints.

use std::collections::HashMap;

use axum::http::{header, HeaderMap, StatusCode};

use crate::config::{AccessConfig, AccessRole};

/// Result of an authorisation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    /// True when the caller may use the report endpoints.
    pub success: bool,
    /// Message for the client when unsuccessful.
    pub error: Option<String>,
    /// Status the authoriser suggests when unsuccessful.
    pub status: Option<StatusCode>,
}

impl AuthOutcome {
    /// An authorised caller.
    pub fn allowed() -> Self {
        Self {
            success: true,
            error: None,
            status: None,
        }
    }

    /// A rejected caller.
    pub fn denied(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            status: Some(status),
        }
    }

    /// Status to answer a rejected caller with.
    ///
    /// Only 401 and 403 are passed through; anything else, including no
    /// status at all, becomes 401.
    pub fn rejection_status(&self) -> StatusCode {
        match self.status {
            Some(status) if is_auth_status(status) => status,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// True for the two statuses a rejected caller may receive: 401 and 403.
pub fn is_auth_status(status: StatusCode) -> bool {
    status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

/// Decides whether a request comes from an administrator.
pub trait AdminAuth: Send + Sync {
    /// Inspects the request headers.
    fn verify(&self, headers: &HeaderMap) -> AuthOutcome;
}

/// Bearer-token authorisation backed by `access.yaml`.
#[derive(Debug, Clone)]
pub struct TokenAuth {
    tokens: HashMap<String, AccessRole>,
}

impl TokenAuth {
    /// Creates an authoriser from the configured tokens.
    pub fn new(access: &AccessConfig) -> Self {
        Self {
            tokens: access.tokens.clone(),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

impl AdminAuth for TokenAuth {
    fn verify(&self, headers: &HeaderMap) -> AuthOutcome {
        match bearer_token(headers).and_then(|token| self.tokens.get(token)) {
            Some(AccessRole::Admin) => AuthOutcome::allowed(),
            Some(_) => AuthOutcome::denied(StatusCode::FORBIDDEN, "Acceso denegado"),
            None => AuthOutcome::denied(StatusCode::UNAUTHORIZED, "No autorizado"),
        }
    }
}
