//! GraphQL documents sent to the W&B API

pub const VIEWER_QUERY: &str = r#"
query Viewer {
  viewer {
    id
    username
    organizations {
      name
      orgEntity {
        name
      }
    }
  }
}
"#;

pub const REGISTRY_COLLECTIONS_QUERY: &str = r#"
query RegistryCollections(
  $organization: String!
  $projectFilters: JSONString
  $cursor: String
  $perPage: Int
) {
  organization(name: $organization) {
    orgEntity {
      name
      artifactCollections(
        projectFilters: $projectFilters
        collectionTypes: [PORTFOLIO]
        after: $cursor
        first: $perPage
      ) {
        pageInfo {
          endCursor
          hasNextPage
        }
        edges {
          node {
            name
            project {
              name
            }
          }
        }
      }
    }
  }
}
"#;

pub const COLLECTION_ARTIFACTS_QUERY: &str = r#"
query CollectionArtifacts(
  $entity: String!
  $project: String!
  $collection: String!
  $cursor: String
  $perPage: Int
) {
  project(name: $project, entityName: $entity) {
    artifactCollection(name: $collection) {
      artifactMemberships(after: $cursor, first: $perPage) {
        pageInfo {
          endCursor
          hasNextPage
        }
        edges {
          node {
            versionIndex
            artifact {
              versionIndex
              artifactType {
                name
              }
              artifactSequence {
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;
