//! Blocking HTTP client for the CDISC Library.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use ct_model::{CtPackage, Standard, VersionDescriptor};

use crate::error::{ClientError, Result};
use crate::resolve::{latest_for, parse_descriptors};
use crate::wire::{PackageBody, PackageListing, into_relations};

/// Public CDISC Library API root.
const DEFAULT_BASE_URL: &str = "https://library.cdisc.org/api";

/// Name of the authentication header the service requires.
const API_KEY_HEADER: &str = "api-key";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the CDISC Library terminology endpoints.
///
/// Holds no state beyond the connection pool; every call issues a fresh
/// request and failed requests abort immediately without retry.
pub struct LibraryClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LibraryClient {
    /// Create a client against the public CDISC Library.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn packages_url(&self) -> String {
        format!("{}/mdr/ct/packages", self.base_url)
    }

    fn package_url(&self, standard: Standard, version: NaiveDate) -> String {
        format!(
            "{}/mdr/ct/packages/{}-{}",
            self.base_url,
            standard.api_slug(),
            version.format("%Y-%m-%d")
        )
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .send()?;
        Ok(response)
    }

    /// Fetch the package listing and parse it into version descriptors.
    pub fn list_packages(&self) -> Result<Vec<VersionDescriptor>> {
        let response = self.get(&self.packages_url())?;
        let body = check_status(response, "package listing")?;
        let listing: PackageListing =
            serde_json::from_str(&body).map_err(|source| ClientError::Json {
                context: "package listing".to_string(),
                source,
            })?;
        let descriptors =
            parse_descriptors(listing.links.packages.iter().map(|link| link.href.as_str()));
        debug!(
            links = listing.links.packages.len(),
            descriptors = descriptors.len(),
            "parsed package listing"
        );
        Ok(descriptors)
    }

    /// Resolve the latest published release date for a standard.
    pub fn resolve_latest(&self, standard: Standard) -> Result<NaiveDate> {
        let descriptors = self.list_packages()?;
        let version = latest_for(&descriptors, standard)
            .ok_or(ClientError::NoVersionsFound { standard })?;
        info!(%standard, %version, "resolved latest terminology version");
        Ok(version)
    }

    /// Fetch one terminology package and decompose it into relations.
    pub fn fetch_package(&self, standard: Standard, version: NaiveDate) -> Result<CtPackage> {
        let url = self.package_url(standard, version);
        let response = self.get(&url)?;
        if response.status().as_u16() == 404 {
            return Err(ClientError::PackageNotFound { standard, version });
        }
        let context = format!("{} package {}", standard, version);
        let body = check_status(response, &context)?;
        let package: PackageBody =
            serde_json::from_str(&body).map_err(|source| ClientError::Json {
                context,
                source,
            })?;
        let (codelists, terms) = into_relations(package);
        info!(
            %standard,
            %version,
            codelists = codelists.len(),
            terms = terms.len(),
            "fetched terminology package"
        );
        Ok(CtPackage {
            standard,
            version,
            codelists,
            terms,
        })
    }
}

/// Map authentication and other non-success statuses to errors, then
/// read the body.
fn check_status(response: Response, context: &str) -> Result<String> {
    let status = response.status();
    if status.as_u16() == 401 || status.as_u16() == 403 {
        return Err(ClientError::Unauthorized {
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            context: context.to_string(),
        });
    }
    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_library_layout() {
        let client = LibraryClient::with_base_url("k", "https://example.test/api/").unwrap();
        assert_eq!(
            client.packages_url(),
            "https://example.test/api/mdr/ct/packages"
        );
        let version = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
        assert_eq!(
            client.package_url(Standard::Sdtm, version),
            "https://example.test/api/mdr/ct/packages/sdtmct-2023-06-30"
        );
        assert_eq!(
            client.package_url(Standard::QsFt, version),
            "https://example.test/api/mdr/ct/packages/qs-ftct-2023-06-30"
        );
    }

    #[test]
    fn client_creation_succeeds() {
        assert!(LibraryClient::new("key").is_ok());
    }
}
