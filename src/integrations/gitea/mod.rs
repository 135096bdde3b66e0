use miette::Diagnostic;
use reqwest::Client;

mod get_issue;

pub(crate) use get_issue::get_issue_body;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The HTTP client used for every request to a Gitea instance.
pub(crate) fn client() -> Result<Client, Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(Error::Client)
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("Could not set up an HTTP client: {0}")]
    #[diagnostic(
        code(gitea::client),
        help("This usually means the TLS backend could not be initialized on this system.")
    )]
    Client(#[source] reqwest::Error),
    #[error("Trouble communicating with the Gitea instance while {activity}: {err}")]
    #[diagnostic(
        code(gitea::api_request_error),
        help(
            "There was a problem communicating with the Gitea instance {host}, this may be a network issue, a typo in the repo or issue ID, or a private repository."
        )
    )]
    ApiRequest {
        err: String,
        activity: String,
        host: String,
    },
    #[error("Trouble reading the response from Gitea while {activity}: {source}")]
    #[diagnostic(
        code(gitea::api_response_error),
        help("The Gitea instance at {host} closed the connection or sent a body that is not valid text.")
    )]
    ApiResponse {
        source: reqwest::Error,
        activity: String,
        host: String,
    },
}
