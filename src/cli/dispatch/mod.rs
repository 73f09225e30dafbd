use crate::cli::actions::Action;
use anyhow::{Context, Result};
use secrecy::SecretString;

/// Map validated CLI matches to a server action
///
/// # Errors
/// Returns an error if required arguments are missing
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        gotrue_url: matches
            .get_one::<String>("gotrue-url")
            .cloned()
            .context("missing required argument: --gotrue-url")?,
        gotrue_api_key: matches
            .get_one::<String>("gotrue-api-key")
            .cloned()
            .map(SecretString::from)
            .context("missing required argument: --gotrue-api-key")?,
    })
}
