use url::Url;

/// Rebuilds the base URL: scheme, host (with any explicit port) and path
///
/// Query, fragment and credentials are left out.
pub fn reconstruct_base_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or("");
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}
