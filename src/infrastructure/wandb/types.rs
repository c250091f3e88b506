//! Wire types for W&B GraphQL responses

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<N> {
    pub page_info: PageInfo,
    pub edges: Vec<Edge<N>>,
}

#[derive(Debug, Deserialize)]
pub struct Edge<N> {
    pub node: N,
}

#[derive(Debug, Deserialize)]
pub struct NameRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub username: Option<String>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub org_entity: Option<NameRef>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionsData {
    pub organization: Option<OrganizationCollections>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCollections {
    pub org_entity: Option<OrgEntityCollections>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgEntityCollections {
    pub name: String,
    pub artifact_collections: Connection<CollectionNode>,
}

#[derive(Debug, Deserialize)]
pub struct CollectionNode {
    pub name: String,
    pub project: NameRef,
}

#[derive(Debug, Deserialize)]
pub struct ArtifactsData {
    pub project: Option<ProjectArtifacts>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectArtifacts {
    pub artifact_collection: Option<CollectionArtifacts>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionArtifacts {
    pub artifact_memberships: Connection<MembershipNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipNode {
    pub version_index: Option<i64>,
    pub artifact: ArtifactNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactNode {
    pub version_index: Option<i64>,
    pub artifact_type: Option<NameRef>,
    pub artifact_sequence: NameRef,
}
