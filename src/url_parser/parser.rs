use anyhow::{Context, Result};
use tracing::{debug, info, instrument, trace, warn};
use url::Url;

use super::model::ParsedUrl;
use super::url_processor::process_query_parameters;
use super::url_reconstructor::reconstruct_base_url;

/// Decomposes a URL string into its base URL and decoded query parameters
///
/// This function never fails. Input that is not a valid URL produces a
/// `ParsedUrl` whose `error` holds the parser message, with an empty base
/// URL and no parameters.
///
/// # Arguments
/// * `url` - The URL to decompose; it is not assumed to be well-formed
///
/// # Returns
/// * `ParsedUrl` - The readable decomposition, or the failure as data
#[instrument(level = "debug", skip_all, fields(url = %url))]
pub fn decompose(url: &str) -> ParsedUrl {
    trace!("Starting URL decomposition");

    // Parse failures become data, never an Err
    match parse_components(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            let message = format!("{:#}", e);
            warn!("Could not decompose '{}': {}", url, message);
            ParsedUrl::failure(message)
        }
    }
}

fn parse_components(url: &str) -> Result<ParsedUrl> {
    info!("Parsing URL: {}", url);

    let parsed_url = Url::parse(url).context("Failed to parse URL")?;

    // Keep scheme, host and path; query and fragment are dropped
    let base_url = reconstruct_base_url(&parsed_url);
    debug!("Base URL extracted: {}", base_url);

    // Decode and coerce each query value
    let params = process_query_parameters(&parsed_url);
    info!("URL decomposition complete. Found {} parameters", params.len());

    Ok(ParsedUrl::success(base_url, params))
}
