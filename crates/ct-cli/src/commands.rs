//! Command implementations.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use ct_client::LibraryClient;
use ct_model::{PackageVersion, Standard};
use ct_report::render::{apply_table_style, header_cell};
use ct_report::{KeyKind, LookupReport, build_merged, lookup, write_artifacts};

use crate::cli::{KeyKindArg, LookupArgs};

/// Environment variable consulted when --api-key is not given.
pub const API_KEY_ENV: &str = "CDISC_API_KEY";

pub fn run_standards() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Standard"), header_cell("Package Prefix")]);
    apply_table_style(&mut table);
    for standard in Standard::all() {
        table.add_row(vec![
            Cell::new(standard.label()),
            Cell::new(standard.api_slug()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_lookup(args: &LookupArgs) -> Result<LookupReport> {
    // Everything user-supplied is validated before the first request.
    let standard: Standard = args.standard.parse()?;
    let supplied_version = args
        .ct_version
        .as_deref()
        .map(str::parse::<PackageVersion>)
        .transpose()?;
    let api_key = resolve_api_key(args)?;

    let lookup_span = info_span!("lookup", key = %args.value, standard = %standard);
    let _guard = lookup_span.enter();

    let client = match &args.base_url {
        Some(url) => LibraryClient::with_base_url(&api_key, url),
        None => LibraryClient::new(&api_key),
    }
    .context("create CDISC Library client")?;

    let version = match supplied_version {
        Some(version) => version.date(),
        None => client
            .resolve_latest(standard)
            .context("resolve latest terminology version")?,
    };

    let package = client
        .fetch_package(standard, version)
        .context("fetch terminology package")?;
    let package_id = package.package_id();

    let merged = build_merged(&package.codelists, &package.terms);
    info!(
        codelists = package.codelists.len(),
        terms = package.terms.len(),
        rows = merged.len(),
        "built merged terminology table"
    );

    let kind = key_kind(args.by);
    let report = lookup(&merged, &args.value, kind, standard, version);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&package_id));
    write_artifacts(&output_dir, &package_id, &merged, report.rows())
        .context("write terminology tables")?;

    Ok(report)
}

fn resolve_api_key(args: &LookupArgs) -> Result<String> {
    args.api_key
        .clone()
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| anyhow!("missing API key: pass --api-key or set {API_KEY_ENV}"))
}

fn key_kind(arg: KeyKindArg) -> KeyKind {
    match arg {
        KeyKindArg::Id => KeyKind::Id,
        KeyKindArg::CodelistCode => KeyKind::CodelistCode,
    }
}

fn default_output_dir(package_id: &str) -> PathBuf {
    std::env::temp_dir().join("cdisc-ct").join(package_id)
}
