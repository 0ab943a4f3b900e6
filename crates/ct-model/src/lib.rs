//! Data model for CDISC Controlled Terminology lookups.

pub mod ct;
pub mod error;
pub mod standard;
pub mod version;

pub use ct::{Codelist, CtPackage, MergedRow, Term};
pub use error::{ParseStandardError, ParseVersionError};
pub use standard::Standard;
pub use version::{PackageVersion, VersionDescriptor};
