//! Package version and descriptor types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::ParseVersionError;
use crate::standard::Standard;

/// Release date of a terminology package, e.g. `2023-06-30`.
///
/// CDISC identifies CT releases by date only; there is no semantic
/// version component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageVersion(NaiveDate);

impl PackageVersion {
    /// Wrap an already-parsed date.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The release date.
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for PackageVersion {
    type Err = ParseVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ParseVersionError {
                input: input.to_string(),
            })
    }
}

/// One entry parsed from the package-listing endpoint: a standard and
/// the release date of one of its published packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDescriptor {
    /// The standard the package belongs to.
    pub standard: Standard,
    /// Release date of the package.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let version: PackageVersion = "2023-06-30".parse().expect("parse version");
        assert_eq!(
            version.date(),
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
        );
        assert_eq!(version.to_string(), "2023-06-30");
    }

    #[test]
    fn rejects_non_iso_dates() {
        assert!("30-06-2023".parse::<PackageVersion>().is_err());
        assert!("2023/06/30".parse::<PackageVersion>().is_err());
        assert!("latest".parse::<PackageVersion>().is_err());
        let error = "latest".parse::<PackageVersion>().unwrap_err();
        assert!(error.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn versions_order_by_date() {
        let older: PackageVersion = "2022-01-01".parse().unwrap();
        let newer: PackageVersion = "2023-06-15".parse().unwrap();
        assert!(older < newer);
    }
}
