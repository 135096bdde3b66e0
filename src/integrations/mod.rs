use serde::Deserialize;

pub(crate) mod gitea;

/// The part of an issue returned by the API that we care about.
#[derive(Debug, Deserialize)]
struct ResponseIssue {
    /// Gitea sends `null` for issues that were opened without a description.
    #[serde(default)]
    body: Option<String>,
}
