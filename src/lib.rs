#![forbid(unsafe_code)]

use std::{
    io::{self, stdout, Write},
    path::PathBuf,
};

use clap::{command, value_parser, Arg, ArgAction, Command};
use log::{debug, info, warn};
use miette::{Diagnostic, Result};

use crate::{
    community::Community,
    config::{Config, Shape, Source},
    integrations::gitea,
    state::RunType,
};

mod community;
mod config;
mod integrations;
mod issue_body;
mod state;

/// Parse the command line, then fetch, convert, and print a single community issue.
///
/// ## Errors
/// Any problem reaching the Gitea instance, reading a local body file, or writing to stdout.
pub async fn run() -> Result<()> {
    let matches = build_cli().get_matches();
    let run_type = Config::from_matches(&matches)?;
    execute(run_type, &mut stdout().lock()).await?;
    Ok(())
}

fn build_cli() -> Command {
    command!()
        .arg(
            Arg::new("host")
                .help("The Gitea host to fetch from, like `gitea.example.com`. Defaults to https when no scheme is given.")
                .required_unless_present("body-file"),
        )
        .arg(
            Arg::new("repo")
                .help("The repository the issue lives in, like `owner/name`.")
                .required_unless_present("body-file"),
        )
        .arg(
            Arg::new("issue_id")
                .help("The ID of the issue to convert.")
                .required_unless_present("body-file"),
        )
        .arg(
            Arg::new("body-file")
                .long("body-file")
                .value_name("PATH")
                .help("Read the issue body from a local file instead of fetching it.")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with_all(["host", "repo", "issue_id"]),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print where the issue body would be read from, without reading it.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print the JSON on a single line.")
                .env("COMMUNITY_INTAKE_COMPACT")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parsed")
                .long("parsed")
                .help("Print every field found in the issue body instead of the community record.")
                .action(ArgAction::SetTrue),
        )
}

async fn execute(run_type: RunType<Config>, out: &mut impl Write) -> Result<(), Error> {
    let (run_type, config) = run_type.take();
    let body = match (run_type, &config.source) {
        (RunType::DryRun(()), Source::Gitea { config, issue_id }) => {
            writeln!(
                out,
                "Would fetch issue body from {}",
                config.get_issue_url(issue_id)
            )
            .map_err(Error::Stdout)?;
            return Ok(());
        }
        (RunType::DryRun(()), Source::File(path)) => {
            writeln!(out, "Would read issue body from {}", path.display())
                .map_err(Error::Stdout)?;
            return Ok(());
        }
        (RunType::Real(()), Source::Gitea { config, issue_id }) => {
            info!("Fetching issue {issue_id} from {}", config.host);
            gitea::get_issue_body(config, issue_id, &gitea::client()?).await?
        }
        (RunType::Real(()), Source::File(path)) => {
            info!("Reading issue body from {}", path.display());
            std::fs::read_to_string(path).map_err(|source| Error::ReadBodyFile {
                path: path.clone(),
                source,
            })?
        }
    };

    let document = issue_body::parse(&body);
    debug!(
        "Parsed {} fields from {} lines: {}",
        document.len(),
        issue_body::lines(&body).count(),
        document.keys().collect::<Vec<_>>().join(", ")
    );
    if document.is_empty() {
        warn!("No `Key: Value` lines found in the issue body");
    }

    let rendered = match config.shape {
        Shape::Community => config.format.render(&Community::from(&document)),
        Shape::Parsed => config.format.render(&document),
    }?;
    writeln!(out, "{rendered}").map_err(Error::Stdout)
}

#[derive(Debug, Diagnostic, thiserror::Error)]
enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Gitea(#[from] gitea::Error),
    #[error("Could not read the issue body from {}", .path.display())]
    #[diagnostic(
        code(body_file::read),
        help("Check that the file exists and is valid UTF-8.")
    )]
    ReadBodyFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not encode the output as JSON: {0}")]
    #[diagnostic(code(output::json))]
    Json(#[from] serde_json::Error),
    #[error("Could not write to stdout")]
    #[diagnostic(code(output::stdout))]
    Stdout(#[source] io::Error),
}
