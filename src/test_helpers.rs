//! Shared test utilities for the photo-wall test suite.
//!
//! Provides catalog fixtures, canned listing sources, and extractors that
//! work with catalogs and surfaces.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = fixture_catalog();
//! let mut surface = HtmlSurface::new();
//! render_batch(&catalog, Filter::All, 0, 3, &mut surface);
//! assert_eq!(unit_names(&surface).len(), 3);
//! ```

use crate::catalog::{
    Catalog, FetchError, ImageEntry, ListingEntry, ListingSource, RepoRef,
};
use crate::category::categorize;
use crate::surface::HtmlSurface;

// =========================================================================
// Fixtures
// =========================================================================

pub fn repo_ref() -> RepoRef {
    RepoRef {
        owner: "Mangkah".to_string(),
        repo: "PhotoSite".to_string(),
        path: "images".to_string(),
    }
}

pub fn download_url(name: &str) -> String {
    format!("https://raw.example.test/images/{name}")
}

/// A catalog entry for `name`, categorized the normal way.
pub fn entry(name: &str) -> ImageEntry {
    ImageEntry {
        name: name.to_string(),
        source_url: download_url(name),
        category: categorize(name),
    }
}

/// Nine images covering every category. Sorted order:
///
/// ```text
/// ai             ai_generated_cat.webp, midjourney_city.png
/// edits          before_edit.jpg
/// landscape      misty-scenery.webp, sunset_landscape.jpg
/// portraits      anna_portrait.jpg, john_portrait.png
/// uncategorized  IMG_0042.jpg, dog.gif
/// ```
pub fn fixture_catalog() -> Catalog {
    Catalog::new(
        [
            "sunset_landscape.jpg",
            "john_portrait.png",
            "dog.gif",
            "ai_generated_cat.webp",
            "before_edit.jpg",
            "anna_portrait.jpg",
            "misty-scenery.webp",
            "IMG_0042.jpg",
            "midjourney_city.png",
        ]
        .into_iter()
        .map(entry)
        .collect(),
    )
}

/// Listing source that returns a fixed set of files.
pub struct StaticListing(pub Vec<ListingEntry>);

impl StaticListing {
    pub fn of(names: &[&str]) -> Self {
        Self(
            names
                .iter()
                .map(|name| ListingEntry {
                    name: name.to_string(),
                    download_url: Some(download_url(name)),
                })
                .collect(),
        )
    }
}

impl ListingSource for StaticListing {
    fn fetch_listing(&self, _repo: &RepoRef) -> Result<Vec<ListingEntry>, FetchError> {
        Ok(self.0.clone())
    }
}

/// Listing source that always answers 404.
pub struct FailingListing;

impl ListingSource for FailingListing {
    fn fetch_listing(&self, _repo: &RepoRef) -> Result<Vec<ListingEntry>, FetchError> {
        Err(FetchError::Status(404))
    }
}

// =========================================================================
// Extractors
// =========================================================================

pub fn catalog_names(catalog: &Catalog) -> Vec<&str> {
    catalog.entries().iter().map(|e| e.name.as_str()).collect()
}

/// Names of the units on a surface, in display order.
pub fn unit_names(surface: &HtmlSurface) -> Vec<&str> {
    surface.units().iter().map(|u| u.name.as_str()).collect()
}
