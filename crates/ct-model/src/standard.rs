//! Terminology standard names.
//!
//! CDISC publishes one Controlled Terminology package family per
//! standard. The set is closed: anything outside it is rejected before
//! a request is made.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStandardError;

/// A CDISC data-model family with its own terminology packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Standard {
    /// Study Data Tabulation Model (the default).
    #[default]
    Sdtm,
    /// Analysis Data Model.
    Adam,
    /// Clinical Data Acquisition Standards Harmonization.
    Cdash,
    /// Define-XML metadata terminology.
    DefineXml,
    /// Standard for Exchange of Nonclinical Data.
    Send,
    /// Digital Data Flow.
    Ddf,
    /// CDISC Glossary.
    Glossary,
    /// Multi-Regional Clinical Trials.
    Mrct,
    /// Protocol terminology.
    Protocol,
    /// Questionnaires and Rating Scales.
    Qrs,
    /// QRS Full Text.
    QsFt,
    /// Trial Master File.
    Tmf,
}

impl Standard {
    /// All supported standards, in display order.
    pub const fn all() -> &'static [Standard] {
        &[
            Self::Sdtm,
            Self::Adam,
            Self::Cdash,
            Self::DefineXml,
            Self::Send,
            Self::Ddf,
            Self::Glossary,
            Self::Mrct,
            Self::Protocol,
            Self::Qrs,
            Self::QsFt,
            Self::Tmf,
        ]
    }

    /// Canonical display name (e.g. "SDTM", "DEFINE-XML").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sdtm => "SDTM",
            Self::Adam => "ADaM",
            Self::Cdash => "CDASH",
            Self::DefineXml => "DEFINE-XML",
            Self::Send => "SEND",
            Self::Ddf => "DDF",
            Self::Glossary => "Glossary",
            Self::Mrct => "MRCT",
            Self::Protocol => "Protocol",
            Self::Qrs => "QRS",
            Self::QsFt => "QS-FT",
            Self::Tmf => "TMF",
        }
    }

    /// Lowercase package prefix used by the CDISC Library
    /// (e.g. "sdtmct" in "sdtmct-2023-06-30").
    pub const fn api_slug(&self) -> &'static str {
        match self {
            Self::Sdtm => "sdtmct",
            Self::Adam => "adamct",
            Self::Cdash => "cdashct",
            Self::DefineXml => "define-xmlct",
            Self::Send => "sendct",
            Self::Ddf => "ddfct",
            Self::Glossary => "glossaryct",
            Self::Mrct => "mrctct",
            Self::Protocol => "protocolct",
            Self::Qrs => "qrsct",
            Self::QsFt => "qs-ftct",
            Self::Tmf => "tmfct",
        }
    }

    /// Inverse of [`Standard::api_slug`], case-insensitive.
    pub fn from_api_slug(slug: &str) -> Option<Self> {
        let key = slug.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|standard| standard.api_slug() == key)
    }

    /// Comma-separated list of valid names, for diagnostics.
    pub fn valid_names() -> String {
        let labels: Vec<&str> = Self::all().iter().map(|s| s.label()).collect();
        labels.join(", ")
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Standard {
    type Err = ParseStandardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let key = input.trim().to_uppercase();
        let standard = match key.as_str() {
            "SDTM" => Self::Sdtm,
            "ADAM" => Self::Adam,
            "CDASH" => Self::Cdash,
            "DEFINE-XML" | "DEFINEXML" => Self::DefineXml,
            "SEND" => Self::Send,
            "DDF" => Self::Ddf,
            "GLOSSARY" => Self::Glossary,
            "MRCT" => Self::Mrct,
            "PROTOCOL" => Self::Protocol,
            "QRS" => Self::Qrs,
            "QS-FT" | "QSFT" => Self::QsFt,
            "TMF" => Self::Tmf,
            _ => {
                return Err(ParseStandardError {
                    input: input.to_string(),
                });
            }
        };
        Ok(standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sdtm".parse::<Standard>().unwrap(), Standard::Sdtm);
        assert_eq!("SDTM".parse::<Standard>().unwrap(), Standard::Sdtm);
        assert_eq!("AdAm".parse::<Standard>().unwrap(), Standard::Adam);
        assert_eq!(
            "define-xml".parse::<Standard>().unwrap(),
            Standard::DefineXml
        );
        assert_eq!("qs-ft".parse::<Standard>().unwrap(), Standard::QsFt);
    }

    #[test]
    fn parse_rejects_unknown_with_full_list() {
        let error = "FOO".parse::<Standard>().unwrap_err();
        let message = error.to_string();
        assert!(message.contains("FOO"));
        for standard in Standard::all() {
            assert!(
                message.contains(standard.label()),
                "diagnostic should list {}",
                standard.label()
            );
        }
    }

    #[test]
    fn slug_round_trips() {
        for standard in Standard::all() {
            assert_eq!(
                Standard::from_api_slug(standard.api_slug()),
                Some(*standard)
            );
        }
        assert_eq!(Standard::from_api_slug("SDTMCT"), Some(Standard::Sdtm));
        assert_eq!(Standard::from_api_slug("nosuchct"), None);
    }

    #[test]
    fn label_round_trips_through_parse() {
        for standard in Standard::all() {
            assert_eq!(
                standard.label().parse::<Standard>().unwrap(),
                *standard,
                "label {} should parse back",
                standard.label()
            );
        }
    }
}
