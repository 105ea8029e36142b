//! # Photo Wall
//!
//! A progressive photo wall over a GitHub repository. One directory listing
//! is fetched, images are sorted into categories by filename, and the
//! gallery grows a batch at a time as the viewer scrolls, with a filter bar
//! and a lightbox for the full-size image.
//!
//! # Flow
//!
//! ```text
//! 1. Load      contents API  →  Catalog        (filter by extension, categorize, sort)
//! 2. Render    Catalog       →  Surface        (first batch)
//! 3. Browse    scroll/filter →  more batches   (Gallery controller)
//! ```
//!
//! The catalog is loaded once and never changes afterwards; only the active
//! filter and the cursor move. Everything after the fetch is synchronous and
//! works against the [`surface::Surface`] trait, so the browsing logic runs
//! the same under tests as behind the HTML page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`category`] | Keyword table, `categorize`, and the `Filter` type |
//! | [`naming`] | Image extension check and caption cleaning |
//! | [`catalog`] | Listing fetch (`ListingSource`, `GithubContents`) and the sorted `Catalog` |
//! | [`render`] | `render_batch`: the next slice of the filtered view onto a surface |
//! | [`gallery`] | `Gallery` controller: filter resets, scroll loading, lightbox activation |
//! | [`lightbox`] | Open/closed overlay state |
//! | [`surface`] | `Surface` trait, render units, status line, HTML surface |
//! | [`page`] | Full standalone HTML pages with Maud |
//! | [`config`] | `gallery.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Failure
//!
//! The only fallible step is the listing fetch. A failure is reported once,
//! the gallery stays empty and shows the failure status; nothing is retried.

pub mod catalog;
pub mod category;
pub mod config;
pub mod gallery;
pub mod lightbox;
pub mod naming;
pub mod output;
pub mod page;
pub mod render;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_helpers;
