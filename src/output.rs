//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure.
//!
//! ## Catalog
//!
//! ```text
//! Mangkah/PhotoSite/images (3 images)
//! ai (1 photos)
//!     001 ai generated cat
//!         Source: ai_generated_cat.webp
//! landscape (1 photos)
//!     001 sunset landscape
//!         Source: sunset_landscape.jpg
//! portraits (1 photos)
//!     001 john portrait
//!         Source: john_portrait.png
//! ```
//!
//! Empty categories are left out.
//!
//! ## Build
//!
//! ```text
//! all → index.html (3 of 3, All loaded.)
//! portraits → portraits.html (1 of 1, All loaded.)
//! ```

use crate::catalog::{Catalog, RepoRef};
use crate::category::{Category, Filter};
use crate::naming;
use crate::render::BatchOutcome;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn category_header(category: Category, count: usize) -> String {
    format!("{} ({} photos)", category, count)
}

// ============================================================================
// Catalog
// ============================================================================

/// Format the loaded catalog grouped by category, in catalog order.
pub fn format_catalog_output(catalog: &Catalog, repo: &RepoRef) -> Vec<String> {
    let mut lines = vec![format!(
        "{}/{}/{} ({} images)",
        repo.owner,
        repo.repo,
        repo.path,
        catalog.len()
    )];

    let mut categories: Vec<Category> = Category::ALL.to_vec();
    categories.sort();

    for category in categories {
        let entries: Vec<_> = catalog.in_category(category).collect();
        if entries.is_empty() {
            continue;
        }
        lines.push(category_header(category, entries.len()));
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(i + 1),
                naming::caption(&entry.name)
            ));
            lines.push(format!("{}Source: {}", indent(2), entry.name));
        }
    }

    lines
}

pub fn print_catalog_output(catalog: &Catalog, repo: &RepoRef) {
    for line in format_catalog_output(catalog, repo) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// One line per written page.
pub fn format_page_line(
    filter: Filter,
    path: &Path,
    outcome: &BatchOutcome,
    filtered_len: usize,
) -> String {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!(
        "{} → {} ({} of {}, {})",
        filter, file, outcome.cursor, filtered_len, outcome.status
    )
}

pub fn print_page_line(filter: Filter, path: &Path, outcome: &BatchOutcome, filtered_len: usize) {
    println!("{}", format_page_line(filter, path, outcome, filtered_len));
}
