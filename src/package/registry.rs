//! HTTP registry source
//!
//! Content is served from a raw file host (`<content>/<subdir>/<bundle>/<file>`)
//! while enumeration goes through a directory-listing API
//! (`<api>/<subdir>`) returning `[{ "name", "type": "dir" | "file" }]`.

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CompanionError, Result, package};

use super::kind::PackageKind;
use super::manifest::Manifest;
use super::source::PackageSource;

const USER_AGENT: &str = concat!("cursor-companion/", env!("CARGO_PKG_VERSION"));

/// Entry returned by the directory-listing API
#[derive(Debug, Deserialize)]
struct ListingEntry {
    name: String,
    #[serde(rename = "type")]
    entry_type: String,
}

#[derive(Debug, Clone)]
pub struct RegistryClient {
    content_url: String,
    api_url: String,
    http: Client,
}

impl RegistryClient {
    pub fn new(content_url: &str, api_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CompanionError::Http {
                url: content_url.to_string(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            content_url: content_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn content_file_url(&self, kind: &PackageKind, bundle: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.content_url, kind.subdirectory, bundle, path
        )
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        self.http
            .get(url)
            .send()
            .map_err(|e| classify_transport_error(url, &e))
    }
}

impl PackageSource for RegistryClient {
    fn location(&self) -> String {
        self.content_url.clone()
    }

    fn fetch_manifest(&self, kind: &PackageKind, bundle: &str) -> Result<Manifest> {
        let url = self.content_file_url(kind, bundle, kind.manifest_file);
        let response = self.get(&url)?;
        if !response.status().is_success() {
            debug!(url, status = %response.status(), "manifest request failed");
            return Err(package::not_found(kind.kind, bundle));
        }
        let bytes = response
            .bytes()
            .map_err(|e| classify_transport_error(&url, &e))?;
        Manifest::from_slice(&bytes, bundle)
    }

    fn fetch_file(&self, kind: &PackageKind, bundle: &str, path: &str) -> Result<Vec<u8>> {
        let url = self.content_file_url(kind, bundle, path);
        let response = self.get(&url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CompanionError::Http {
                url,
                reason: format!("download failed with status {}", status_text(status)),
            });
        }
        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|e| classify_transport_error(&url, &e))
    }

    fn list_bundles(&self, kind: &PackageKind) -> Result<Vec<String>> {
        let url = format!("{}/{}", self.api_url, kind.subdirectory);
        debug!(url, "GET listing");
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| classify_transport_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompanionError::RegistryApi {
                status: status.as_u16(),
                url,
            });
        }

        let entries: Vec<ListingEntry> = response.json().map_err(|e| CompanionError::Http {
            url: url.clone(),
            reason: format!("unexpected listing response: {e}"),
        })?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.entry_type == "dir")
            .map(|entry| entry.name)
            .collect())
    }
}

/// Connection-level failures mean the registry is unreachable; anything else
/// is reported as a generic registry error.
fn classify_transport_error(url: &str, err: &reqwest::Error) -> CompanionError {
    if err.is_connect() || err.is_timeout() {
        CompanionError::NetworkUnreachable {
            url: url.to_string(),
        }
    } else {
        CompanionError::Http {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = RegistryClient::new("https://host/content/", "https://api/contents/").unwrap();
        assert_eq!(
            client.content_file_url(&PackageKind::PROMPT, "base", "prompt_manifest.json"),
            "https://host/content/prompts/base/prompt_manifest.json"
        );
        assert_eq!(client.location(), "https://host/content");
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        // Port 9 on localhost is reserved (discard) and normally closed.
        let client = RegistryClient::new("http://127.0.0.1:9", "http://127.0.0.1:9").unwrap();
        let err = client
            .fetch_manifest(&PackageKind::WORKFLOW, "demo")
            .unwrap_err();
        assert!(
            matches!(err, CompanionError::NetworkUnreachable { .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(StatusCode::NOT_FOUND), "404 Not Found");
    }
}
