//! End-to-end sync check against stubbed DSS and W&B endpoints

use dss_wandb_sync::config::{AppConfig, WandbConfig};
use dss_wandb_sync::domain::{ModelCheck, SyncFailure, SyncOutcome};
use dss_wandb_sync::{run_sync_check, SyncTarget};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Stubs {
    dss: MockServer,
    wandb: MockServer,
}

impl Stubs {
    async fn start() -> Self {
        Self {
            dss: MockServer::start().await,
            wandb: MockServer::start().await,
        }
    }

    fn config(&self) -> AppConfig {
        AppConfig {
            wandb: WandbConfig {
                base_url: self.wandb.uri(),
                organization: None,
            },
            ..AppConfig::default()
        }
    }

    fn target(&self) -> SyncTarget {
        SyncTarget {
            instance_url: self.dss.uri(),
            api_token: "dss-token".to_string(),
            project_key: "CHURN".to_string(),
        }
    }

    async fn secrets(&self, secrets: Value) {
        Mock::given(method("GET"))
            .and(path("/public/api/auth/info"))
            .and(query_param("withSecrets", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "authIdentifier": "ci-bot",
                "secrets": secrets
            })))
            .mount(&self.dss)
            .await;
    }

    async fn saved_models(&self, models: Value) {
        Mock::given(method("GET"))
            .and(path("/public/api/projects/CHURN/savedmodels/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(models))
            .mount(&self.dss)
            .await;
    }

    async fn versions(&self, model_id: &str, versions: Value) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/public/api/projects/CHURN/savedmodels/{}/versions",
                model_id
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(versions))
            .mount(&self.dss)
            .await;
    }

    async fn viewer(&self) {
        self.graphql(
            "query Viewer",
            json!({"viewer": {"id": "u1", "username": "ci-bot", "organizations": [{"name": "acme"}]}}),
        )
        .await;
    }

    async fn registry(&self, artifacts: Value) {
        self.graphql(
            "query RegistryCollections",
            json!({"organization": {"orgEntity": {
                "name": "acme-org",
                "artifactCollections": {
                    "pageInfo": {"endCursor": null, "hasNextPage": false},
                    "edges": [{"node": {"name": "churn", "project": {"name": "wandb-registry-model"}}}]
                }
            }}}),
        )
        .await;
        self.graphql(
            "query CollectionArtifacts",
            json!({"project": {"artifactCollection": {"artifactMemberships": {
                "pageInfo": {"endCursor": null, "hasNextPage": false},
                "edges": artifacts
            }}}}),
        )
        .await;
    }

    async fn graphql(&self, operation: &str, data: Value) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_string_contains(operation))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .mount(&self.wandb)
            .await;
    }
}

fn membership(version_index: i64, artifact_type: &str, sequence: &str) -> Value {
    json!({"node": {"versionIndex": version_index, "artifact": {
        "versionIndex": 0,
        "artifactType": {"name": artifact_type},
        "artifactSequence": {"name": sequence}
    }}})
}

#[tokio::test]
async fn passes_when_a_saved_model_is_published() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandbcred", "value": "wb-key"}])).await;
    stubs.viewer().await;
    stubs.saved_models(json!([{"id": "m1"}, {"id": "m2"}, {"id": "m3"}])).await;
    stubs.versions("m1", json!([{"id": "v2", "active": true}])).await;
    stubs.versions("m2", json!([{"id": "v1", "active": false}])).await;
    stubs.versions("m3", json!([{"id": "v9", "active": true}])).await;
    stubs
        .registry(json!([
            membership(0, "MODEL", "x-dataiku-m1-v2-y"),
            membership(1, "dataset", "dataiku-m3-v9"),
        ]))
        .await;

    let report = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap();

    assert_eq!(report.outcome(), SyncOutcome::Published);
    assert_eq!(report.model_artifacts, 1);
    match &report.checks[0] {
        ModelCheck::Matched { artifacts, .. } => {
            assert_eq!(artifacts[0].name, "x-dataiku-m1-v2-y:v0");
            assert_eq!(artifacts[0].path, "acme-org/wandb-registry-model/churn:v0");
        }
        other => panic!("expected a match, got {:?}", other),
    }
    assert!(matches!(report.checks[1], ModelCheck::Skipped { .. }));
    assert!(matches!(report.checks[2], ModelCheck::Unmatched { .. }));
}

#[tokio::test]
async fn fails_when_no_saved_model_is_published() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandbcred", "value": "wb-key"}])).await;
    stubs.viewer().await;
    stubs.saved_models(json!([{"id": "m1"}])).await;
    stubs.versions("m1", json!([{"id": "v2", "active": true}])).await;
    stubs.registry(json!([membership(0, "model", "dataiku-M1-v2")])).await;

    let err = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap_err();

    assert!(matches!(err, SyncFailure::NoPublishedModels));
    assert_eq!(
        err.to_string(),
        "Sync Validation Failed: Found models in Dataiku, but none are registered in W&B."
    );
}

#[tokio::test]
async fn empty_project_passes_without_listing_the_registry() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandbcred", "value": "wb-key"}])).await;
    stubs.viewer().await;
    stubs.saved_models(json!([])).await;
    Mock::given(body_string_contains("query RegistryCollections"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&stubs.wandb)
        .await;

    let report = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap();

    assert_eq!(report.outcome(), SyncOutcome::NothingToValidate);
}

#[tokio::test]
async fn empty_project_passes_even_when_wandb_rejects_the_key() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandbcred", "value": "wb-key"}])).await;
    stubs.saved_models(json!([])).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&stubs.wandb)
        .await;

    let report = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap();

    assert_eq!(report.outcome(), SyncOutcome::NothingToValidate);
}

#[tokio::test]
async fn empty_project_passes_when_wandb_organization_is_ambiguous() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandbcred", "value": "wb-key"}])).await;
    stubs.saved_models(json!([])).await;
    stubs
        .graphql(
            "query Viewer",
            json!({"viewer": {"id": "u1", "username": "ci-bot", "organizations": [{"name": "a"}, {"name": "b"}]}}),
        )
        .await;

    let report = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap();

    assert_eq!(report.outcome(), SyncOutcome::NothingToValidate);
}

#[tokio::test]
async fn misnamed_secret_fails_the_run() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandb_cred", "value": "wb-key"}])).await;

    let err = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap_err();

    assert!(matches!(err, SyncFailure::MissingSecret));
}

#[tokio::test]
async fn rejected_wandb_key_is_a_communication_error() {
    let stubs = Stubs::start().await;
    stubs.secrets(json!([{"key": "wandbcred", "value": "wb-key"}])).await;
    stubs.saved_models(json!([{"id": "m1"}])).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&stubs.wandb)
        .await;

    let err = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap_err();

    assert!(matches!(err, SyncFailure::Communication(_)));
    assert!(err.to_string().starts_with("Weights & Biases communication error:"));
}

#[tokio::test]
async fn unreachable_dss_is_a_setup_error() {
    let stubs = Stubs::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&stubs.dss)
        .await;

    let err = run_sync_check(&stubs.config(), &stubs.target()).await.unwrap_err();

    assert!(matches!(err, SyncFailure::Setup(_)));
    assert!(err.to_string().contains("maintenance"));
}
