//! User secrets as exposed by the DSS authentication endpoint

use serde::Deserialize;

/// A single key/value secret attached to the authenticated DSS user
#[derive(Clone, Deserialize)]
pub struct UserSecret {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl UserSecret {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

impl std::fmt::Debug for UserSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSecret")
            .field("key", &self.key)
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Identity of the caller plus, when requested, its secrets
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    #[serde(default)]
    pub auth_identifier: Option<String>,
    #[serde(default)]
    pub secrets: Vec<UserSecret>,
}

impl AuthInfo {
    /// Linear search for the secret stored under `key`.
    ///
    /// Keys compare exactly. A secret with an empty value counts as absent.
    pub fn find_secret(&self, key: &str) -> Option<&str> {
        self.secrets
            .iter()
            .find(|secret| secret.key == key)
            .and_then(|secret| secret.value.as_deref())
            .filter(|value| !value.is_empty())
    }
}
