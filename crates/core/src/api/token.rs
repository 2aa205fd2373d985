use std::collections::HashMap;

use crate::models::auth::{AuthResponse, User};

/// Key under which the session token is stored.
pub const TOKEN_KEY: &str = "qfin_token";
/// Key under which the refresh token is stored, when the backend issues one.
pub const REFRESH_TOKEN_KEY: &str = "qfin_refresh_token";

/// A bearer token. Callers pass it explicitly to every authenticated call.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Read the session token out of a store, if one was saved.
    pub fn from_store(store: &dyn TokenStore) -> Option<Self> {
        store
            .get(TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
            .map(Self)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Opaque key-value storage for session credentials.
///
/// Browsers back this with local storage; tests and CLIs use
/// [`MemoryTokenStore`].
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    /// Remove every stored key.
    fn clear(&mut self);
}

/// In-process [`TokenStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

/// Persist the tokens of a successful login/register/refresh.
pub fn save_session(store: &mut dyn TokenStore, auth: &AuthResponse) -> AuthToken {
    store.set(TOKEN_KEY, auth.token.clone());
    if let Some(refresh) = &auth.refresh_token {
        store.set(REFRESH_TOKEN_KEY, refresh.clone());
    }
    AuthToken::new(auth.token.clone())
}

/// An authenticated session: who is logged in and with which token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: AuthToken,
}
