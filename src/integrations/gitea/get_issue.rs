use log::{debug, warn};
use reqwest::{Client, Response};

use super::Error;
use crate::{config, integrations::ResponseIssue};

/// Fetch the raw body of a single issue.
///
/// A response that can't be decoded, or an issue without a body, gives an empty string rather than
/// an error. Only transport failures and non-success statuses are errors.
pub(crate) async fn get_issue_body(
    config: &config::Gitea,
    issue_id: &str,
    client: &Client,
) -> Result<String, Error> {
    let url = config.get_issue_url(issue_id);
    let activity = format!("fetching issue {issue_id} of {repo}", repo = config.repo);
    debug!("Fetching issue body from {url}");

    let text = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(|source| Error::ApiRequest {
            err: source.to_string(),
            activity: activity.clone(),
            host: config.host.clone(),
        })?
        .text()
        .await
        .map_err(|source| Error::ApiResponse {
            source,
            activity,
            host: config.host.clone(),
        })?;

    Ok(body_from_response(&text))
}

fn body_from_response(text: &str) -> String {
    match serde_json::from_str::<ResponseIssue>(text) {
        Ok(ResponseIssue { body: Some(body) }) => body,
        Ok(ResponseIssue { body: None }) => {
            warn!("The issue has no body, treating it as empty");
            String::new()
        }
        Err(err) => {
            warn!("Could not decode the issue from Gitea, treating its body as empty: {err}");
            String::new()
        }
    }
}
