//! Version resolution over the package listing.
//!
//! The listing names each package by a path ending in
//! `<slug>-<YYYY-MM-DD>` (e.g. `/mdr/ct/packages/sdtmct-2023-06-30`).
//! Resolution parses those paths into descriptors and picks the maximum
//! date for the requested standard.

use chrono::NaiveDate;
use tracing::debug;

use ct_model::{Standard, VersionDescriptor};

/// Select the latest release date among descriptors for `standard`.
///
/// Returns `None` when no descriptor matches. Equal dates are not
/// disambiguated; the service does not publish duplicates for a given
/// standard and date.
pub fn latest_for(descriptors: &[VersionDescriptor], standard: Standard) -> Option<NaiveDate> {
    descriptors
        .iter()
        .filter(|descriptor| descriptor.standard == standard)
        .map(|descriptor| descriptor.date)
        .max()
}

/// Parse the terminal path segment of a package href into a descriptor.
///
/// Links with an unknown slug or an unparseable date are skipped: the
/// listing also carries packages for standards outside our closed set.
pub(crate) fn parse_descriptor(href: &str) -> Option<VersionDescriptor> {
    let segment = href.trim_end_matches('/').rsplit('/').next()?;
    // "<slug>-<YYYY-MM-DD>": the date suffix is always 10 ASCII chars.
    if !segment.is_ascii() || segment.len() < 12 {
        return None;
    }
    let (slug, suffix) = segment.split_at(segment.len() - 11);
    let date = suffix.strip_prefix('-')?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let Some(standard) = Standard::from_api_slug(slug) else {
        debug!(slug, "skipping package link with unknown standard");
        return None;
    };
    Some(VersionDescriptor { standard, date })
}

/// Parse every usable package link into a descriptor.
pub(crate) fn parse_descriptors<'a, I>(hrefs: I) -> Vec<VersionDescriptor>
where
    I: IntoIterator<Item = &'a str>,
{
    hrefs.into_iter().filter_map(parse_descriptor).collect()
}
