//! Error types for CDISC Library access.

use chrono::NaiveDate;
use thiserror::Error;

use ct_model::Standard;

/// Errors raised while talking to the CDISC Library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service rejected the API key.
    #[error("CDISC Library rejected the API key (HTTP {status})")]
    Unauthorized {
        /// HTTP status returned (401 or 403).
        status: u16,
    },

    /// The requested standard+version names no published package.
    #[error("no terminology package published for {standard} version {version}")]
    PackageNotFound {
        /// Requested standard.
        standard: Standard,
        /// Requested release date.
        version: NaiveDate,
    },

    /// The listing contained no package for the requested standard.
    #[error("no terminology versions found for standard {standard}")]
    NoVersionsFound {
        /// Requested standard.
        standard: Standard,
    },

    /// Any other non-success HTTP status.
    #[error("CDISC Library returned HTTP {status} for {context}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// What was being fetched.
        context: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("failed to decode {context}: {source}")]
    Json {
        /// What was being decoded.
        context: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn messages_name_standard_and_version() {
        let error = ClientError::PackageNotFound {
            standard: Standard::Sdtm,
            version: NaiveDate::from_ymd_opt(2023, 6, 30).unwrap(),
        };
        let message = error.to_string();
        assert!(message.contains("SDTM"));
        assert!(message.contains("2023-06-30"));

        let error = ClientError::NoVersionsFound {
            standard: Standard::Adam,
        };
        assert!(error.to_string().contains("ADaM"));
    }

    #[test]
    fn unauthorized_names_the_api_key() {
        let error = ClientError::Unauthorized { status: 401 };
        let message = error.to_string();
        assert!(message.contains("API key"));
        assert!(message.contains("401"));
    }
}
