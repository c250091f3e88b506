use serde::{Deserialize, Serialize};

/// A saved model tracked in a DSS project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedModel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl SavedModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// One trained version of a saved model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedModelVersion {
    pub id: String,
    #[serde(default)]
    pub active: bool,
}

impl SavedModelVersion {
    pub fn new(id: impl Into<String>, active: bool) -> Self {
        Self {
            id: id.into(),
            active,
        }
    }
}

/// Pick the version flagged as active, if any
pub fn active_version(versions: Vec<SavedModelVersion>) -> Option<SavedModelVersion> {
    versions.into_iter().find(|v| v.active)
}
