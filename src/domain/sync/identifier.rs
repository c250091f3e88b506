use serde::{Deserialize, Serialize};

/// Prefix the publishing job puts in front of every artifact it logs
pub const DEFAULT_IDENTIFIER_PREFIX: &str = "dataiku";

/// Key correlating a saved model's active version with registry artifact names.
///
/// Rendered as `<prefix>-<savedModelId>-<activeVersionId>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelIdentifier(String);

impl ModelIdentifier {
    pub fn new(prefix: &str, saved_model_id: &str, version_id: &str) -> Self {
        Self(format!("{}-{}-{}", prefix, saved_model_id, version_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
