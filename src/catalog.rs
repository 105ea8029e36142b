//! Image catalog loading.
//!
//! The catalog is built from a single directory listing fetched from the
//! GitHub repository contents API:
//!
//! ```text
//! GET {api_base}/repos/{owner}/{repo}/contents/{path}
//! → [{ "name": "sunset_landscape.jpg", "download_url": "https://…", … }, …]
//! ```
//!
//! Loading happens once. Entries that are not images (by extension) or that
//! have no `download_url` (subdirectories) are dropped without error; every
//! survivor is categorized and the result is sorted by `(category, name)`.
//! The [`Catalog`] never changes after that.
//!
//! The HTTP call sits behind [`ListingSource`] so the loader can be exercised
//! without a network.

use crate::category::{self, Category};
use crate::naming;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("listing request returned status {0}")]
    Status(u16),
    #[error("listing is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which repository directory to list.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    /// Directory inside the repository, e.g. `images`.
    pub path: String,
}

/// One file descriptor from the listing endpoint. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// A displayable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Original filename.
    pub name: String,
    /// Full-resolution download URL.
    pub source_url: String,
    pub category: Category,
}

/// Images sorted by `(category, name)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
}

impl Catalog {
    /// Build a catalog, establishing the sort order.
    pub fn new(mut entries: Vec<ImageEntry>) -> Self {
        entries.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        Self { entries }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}

/// Anything that can produce a directory listing.
pub trait ListingSource {
    fn fetch_listing(&self, repo: &RepoRef) -> Result<Vec<ListingEntry>, FetchError>;
}

/// Parse a contents-API response body.
///
/// A body that is valid JSON but not an array (e.g. the API's
/// `{"message": "Not Found"}` object) is a [`FetchError::Json`].
pub fn parse_listing(body: &str) -> Result<Vec<ListingEntry>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Turn raw listing entries into catalog entries.
pub fn decorate(listing: Vec<ListingEntry>) -> Vec<ImageEntry> {
    listing
        .into_iter()
        .filter_map(|entry| {
            if !naming::is_image_file(&entry.name) {
                debug!(name = %entry.name, "skipping non-image entry");
                return None;
            }
            let Some(source_url) = entry.download_url else {
                debug!(name = %entry.name, "skipping entry without download_url");
                return None;
            };
            let category = category::categorize(&entry.name);
            Some(ImageEntry {
                name: entry.name,
                source_url,
                category,
            })
        })
        .collect()
}

/// Fetch, filter, categorize and sort. One request, no retry.
pub fn load_catalog(source: &dyn ListingSource, repo: &RepoRef) -> Result<Catalog, FetchError> {
    let listing = source.fetch_listing(repo)?;
    let listed = listing.len();
    let catalog = Catalog::new(decorate(listing));
    info!(
        owner = %repo.owner,
        repo = %repo.repo,
        listed,
        images = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// [`ListingSource`] backed by the GitHub contents API.
pub struct GithubContents {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl GithubContents {
    pub fn new(api_base: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn listing_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base,
            repo.owner,
            repo.repo,
            repo.path.trim_matches('/')
        )
    }
}

impl ListingSource for GithubContents {
    fn fetch_listing(&self, repo: &RepoRef) -> Result<Vec<ListingEntry>, FetchError> {
        let url = self.listing_url(repo);
        debug!(%url, "fetching listing");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text()?;
        parse_listing(&body)
    }
}
