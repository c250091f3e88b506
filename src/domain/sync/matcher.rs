use super::ModelIdentifier;
use crate::domain::registry::ArtifactSummary;

/// Select every artifact whose name contains the identifier (case-sensitive)
pub fn find_matches<'a>(
    identifier: &ModelIdentifier,
    artifacts: &'a [ArtifactSummary],
) -> Vec<&'a ArtifactSummary> {
    artifacts
        .iter()
        .filter(|artifact| artifact.name.contains(identifier.as_str()))
        .collect()
}
