//! The DSS project under check, read from the CI environment

use crate::domain::SyncFailure;

pub const INSTANCE_URL_VAR: &str = "DATAIKU_INSTANCE_DEV_URL";
pub const API_TOKEN_VAR: &str = "DATAIKU_API_TOKEN_DEV";
pub const PROJECT_KEY_VAR: &str = "DATAIKU_PROJECT_KEY";

/// Connection parameters for the DSS project being validated
#[derive(Clone)]
pub struct SyncTarget {
    pub instance_url: String,
    pub api_token: String,
    pub project_key: String,
}

impl SyncTarget {
    pub fn from_env() -> Result<Self, SyncFailure> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve every field through `lookup`, failing on the first one missing.
    ///
    /// Fields are checked in order URL, API key, project key; empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SyncFailure>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str, field: &'static str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or(SyncFailure::MissingConfig(field))
        };

        Ok(Self {
            instance_url: required(INSTANCE_URL_VAR, "URL")?,
            api_token: required(API_TOKEN_VAR, "API_KEY")?,
            project_key: required(PROJECT_KEY_VAR, "PROJECT_KEY")?,
        })
    }
}

impl std::fmt::Debug for SyncTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncTarget")
            .field("instance_url", &self.instance_url)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn missing_field(result: Result<SyncTarget, SyncFailure>) -> &'static str {
        match result {
            Err(SyncFailure::MissingConfig(field)) => field,
            other => panic!("expected missing config, got {:?}", other),
        }
    }

    #[test]
    fn test_all_present() {
        let target = SyncTarget::from_lookup(lookup(&[
            (INSTANCE_URL_VAR, "https://dss.internal:11200"),
            (API_TOKEN_VAR, "dss-token"),
            (PROJECT_KEY_VAR, "CHURN"),
        ]))
        .unwrap();

        assert_eq!(target.instance_url, "https://dss.internal:11200");
        assert_eq!(target.api_token, "dss-token");
        assert_eq!(target.project_key, "CHURN");
    }

    #[test]
    fn test_missing_url() {
        let result = SyncTarget::from_lookup(lookup(&[
            (API_TOKEN_VAR, "dss-token"),
            (PROJECT_KEY_VAR, "CHURN"),
        ]));

        assert_eq!(missing_field(result), "URL");
    }

    #[test]
    fn test_missing_api_key() {
        let result = SyncTarget::from_lookup(lookup(&[
            (INSTANCE_URL_VAR, "https://dss.internal"),
            (PROJECT_KEY_VAR, "CHURN"),
        ]));

        assert_eq!(missing_field(result), "API_KEY");
    }

    #[test]
    fn test_missing_project_key() {
        let result = SyncTarget::from_lookup(lookup(&[
            (INSTANCE_URL_VAR, "https://dss.internal"),
            (API_TOKEN_VAR, "dss-token"),
        ]));

        assert_eq!(missing_field(result), "PROJECT_KEY");
    }

    #[test]
    fn test_empty_value_is_missing() {
        let result = SyncTarget::from_lookup(lookup(&[
            (INSTANCE_URL_VAR, ""),
            (API_TOKEN_VAR, ""),
            (PROJECT_KEY_VAR, "CHURN"),
        ]));

        assert_eq!(missing_field(result), "URL");
    }

    #[test]
    fn test_debug_redacts_token() {
        let target = SyncTarget::from_lookup(lookup(&[
            (INSTANCE_URL_VAR, "https://dss.internal"),
            (API_TOKEN_VAR, "dss-token"),
            (PROJECT_KEY_VAR, "CHURN"),
        ]))
        .unwrap();

        assert!(!format!("{:?}", target).contains("dss-token"));
    }
}
