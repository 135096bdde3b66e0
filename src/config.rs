use std::path::PathBuf;

use clap::ArgMatches;
use miette::Diagnostic;
use thiserror::Error;

pub(crate) use crate::community::Format;
use crate::state::RunType;

/// Where the Gitea API for a repository lives.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Gitea {
    /// The domain or IP of the Gitea instance, optionally with an `http://` or `https://` scheme.
    pub(crate) host: String,
    /// The repository path segment, usually `owner/name`. Used verbatim.
    pub(crate) repo: String,
}

impl Gitea {
    fn get_base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            format!("{host}/api/v1")
        } else {
            format!("https://{host}/api/v1")
        }
    }

    /// get the URL to read a single issue
    pub(crate) fn get_issue_url(&self, issue_id: &str) -> String {
        format!(
            "{base_url}/repos/{repo}/issues/{issue_id}",
            base_url = self.get_base_url(),
            repo = self.repo
        )
    }
}

/// Where the raw issue body is read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Source {
    Gitea { config: Gitea, issue_id: String },
    /// A local copy of an issue body, no network involved.
    File(PathBuf),
}

/// What gets written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Shape {
    /// The fixed community record.
    #[default]
    Community,
    /// Every field found in the issue body.
    Parsed,
}

/// Everything needed for a single run, collected from the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Config {
    pub(crate) source: Source,
    pub(crate) format: Format,
    pub(crate) shape: Shape,
}

impl Config {
    /// Build the config for this run out of already-validated arguments.
    ///
    /// ## Errors
    /// 1. Neither `--body-file` nor all three positional arguments were provided
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<RunType<Self>, Error> {
        let source = if let Some(path) = matches.get_one::<PathBuf>("body-file") {
            Source::File(path.clone())
        } else {
            let required = |name: &'static str| {
                matches
                    .get_one::<String>(name)
                    .cloned()
                    .ok_or(Error::MissingArgument(name))
            };
            Source::Gitea {
                config: Gitea {
                    host: required("host")?,
                    repo: required("repo")?,
                },
                issue_id: required("issue_id")?,
            }
        };
        let format = if matches.get_flag("compact") {
            Format::Compact
        } else {
            Format::Pretty
        };
        let shape = if matches.get_flag("parsed") {
            Shape::Parsed
        } else {
            Shape::Community
        };
        let config = Self {
            source,
            format,
            shape,
        };
        Ok(if matches.get_flag("dry-run") {
            RunType::DryRun(config)
        } else {
            RunType::Real(config)
        })
    }
}

#[derive(Debug, Diagnostic, Error)]
pub(crate) enum Error {
    #[error("Missing the `{0}` argument")]
    #[diagnostic(
        code(config::missing_argument),
        help("Pass a host, repo, and issue ID, or use --body-file to read a local issue body")
    )]
    MissingArgument(&'static str),
}

#[cfg(test)]
mod test_gitea {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::bare_host("gitea.example.com", "https://gitea.example.com/api/v1/repos/owner/name/issues/42")]
    #[case::trailing_slash("gitea.example.com/", "https://gitea.example.com/api/v1/repos/owner/name/issues/42")]
    #[case::https("https://gitea.example.com", "https://gitea.example.com/api/v1/repos/owner/name/issues/42")]
    #[case::http_with_port("http://localhost:3000", "http://localhost:3000/api/v1/repos/owner/name/issues/42")]
    fn issue_url(#[case] host: &str, #[case] expected: &str) {
        let gitea = Gitea {
            host: host.to_string(),
            repo: "owner/name".to_string(),
        };

        assert_eq!(gitea.get_issue_url("42"), expected);
    }
}
