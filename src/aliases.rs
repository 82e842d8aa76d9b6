//! Branch resolution via the Bodhi release table
//!
//! Maps a distro name like `fedora-42` or `fedora-rawhide` to the Koji build
//! tag (`f42-build`) used to form the official repo URL. The table of active
//! Fedora releases is fetched once per process from Bodhi; a pre-fetched
//! JSON dump can be supplied through `FEDORA_RELEASES_FILE` for offline
//! runs, and `BODHI_URL` points the fetch at a staging instance.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;

const DEFAULT_BODHI_URL: &str = "https://bodhi.fedoraproject.org";
const KOJI_BASE: &str = "https://kojipkgs.fedoraproject.org/repos";

/// One active Fedora release as reported by Bodhi. Rawhide shows up with
/// `branch == "rawhide"` and the version number it will be released as.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub branch: String,
    pub version: String,
    pub id_prefix: String,
}

#[derive(Debug, Deserialize)]
struct ReleasesPage {
    releases: Vec<Release>,
    page: u32,
    pages: u32,
}

/// Active releases of the Fedora family (the `fedora-all` alias): current,
/// pending and frozen, archived excluded. EPEL releases are filtered out.
pub fn fedora_all() -> Result<Vec<Release>, Error> {
    let releases = fetch_releases().map_err(Error::AliasFetch)?;
    Ok(releases.into_iter().filter(|r| r.id_prefix == "FEDORA").collect())
}

fn fetch_releases() -> Result<Vec<Release>> {
    if let Ok(path) = env::var("FEDORA_RELEASES_FILE") {
        debug!("reading release table from {path}");
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed reading releases file: {path}"))?;
        let parsed: ReleasesPage =
            serde_json::from_str(&raw).context("Failed decoding releases file")?;
        return Ok(parsed.releases);
    }

    let base = env::var("BODHI_URL").unwrap_or_else(|_| DEFAULT_BODHI_URL.to_string());
    let client = reqwest::blocking::Client::new();
    let mut releases = Vec::new();
    let mut page = 1;
    loop {
        let url = format!("{base}/releases/?exclude_archived=true&rows_per_page=100&page={page}");
        debug!("fetching release table page from {url}");
        let body: ReleasesPage = client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .with_context(|| format!("Failed querying Bodhi at {url}"))?
            .error_for_status()
            .context("Bodhi returned an error status")?
            .json()
            .context("Failed decoding the Bodhi releases payload")?;
        releases.extend(body.releases);
        if body.page >= body.pages {
            break;
        }
        page += 1;
    }
    Ok(releases)
}

/// Resolve a distro name to its Koji build tag.
///
/// `fedora-rawhide` keeps the branch name as-is; numbered branches are
/// normalized by prefixing `f` (`fedora-42` → `f42`). The tag is always
/// formed from the release's version number, so rawhide resolves to
/// something like `f43-build`.
pub fn build_tag(distro: &str, releases: &[Release]) -> Result<String, Error> {
    let branch = distro
        .strip_prefix("fedora-")
        // TODO: deal with epel and eln
        .ok_or_else(|| Error::UnsupportedDistro(distro.to_string()))?;
    let branch = if branch == "rawhide" { branch.to_string() } else { format!("f{branch}") };
    let release = releases
        .iter()
        .find(|r| r.branch == branch)
        .ok_or_else(|| Error::UnknownBranch(branch.clone()))?;
    Ok(format!("f{}-build", release.version))
}

/// The official Koji repo for a build tag and architecture.
pub fn koji_repo_url(tag: &str, arch: &str) -> String {
    format!("{KOJI_BASE}/{tag}/latest/{arch}")
}
