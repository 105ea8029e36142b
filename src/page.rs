//! HTML page assembly.
//!
//! Takes a rendered [`HtmlSurface`] and wraps it in a complete, standalone
//! page: header with the theme selector, the filter bar, the gallery grid, the
//! status line, and the (initially hidden) lightbox overlay.
//!
//! ## Output Structure
//!
//! One page per filter, so the filter bar is plain links:
//!
//! ```text
//! dist/
//! ├── index.html          # all
//! ├── portraits.html
//! ├── landscape.html
//! ├── ai.html
//! ├── edits.html
//! └── uncategorized.html
//! ```
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined into every page:
//! - `static/style.css`: masonry grid, themes, lightbox
//! - `static/gallery.js`: scroll loading of pending units, lightbox open/close,
//!   reveal transition, theme switch

use crate::category::Filter;
use crate::config::{GalleryConfig, THEMES};
use crate::surface::{HtmlSurface, LoadStatus, RenderUnit, render_unit};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// File name of the page showing `filter`.
pub fn page_filename(filter: Filter) -> String {
    match filter {
        Filter::All => "index.html".to_string(),
        Filter::Only(category) => format!("{category}.html"),
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, body_class: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body class=(body_class) {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Title and theme selector.
fn site_header(title: &str, theme: &str) -> Markup {
    html! {
        header.site-header {
            h1 { (title) }
            label.theme-picker {
                "Theme "
                select #themeSelect {
                    @for name in THEMES {
                        option value=(name) selected[*name == theme] { (name) }
                    }
                }
            }
        }
    }
}

/// Filter bar. Exactly one entry carries the `active` class.
pub fn render_filter_bar(active: Filter) -> Markup {
    html! {
        nav.filters {
            @for filter in Filter::choices() {
                a.filter.active[filter == active]
                    href=(page_filename(filter))
                    data-filter=(filter.label()) { (filter.label()) }
            }
        }
    }
}

fn lightbox_overlay() -> Markup {
    html! {
        div #lightbox .lightbox .hidden aria-hidden="true" {
            button #lightboxClose .lightbox-close type="button" aria-label="Close" { "×" }
            figure.lightbox-content {
                img #lightboxImg src="" alt="";
                figcaption #lightboxCaption {}
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Render a full gallery page for `filter` from what the surface holds.
///
/// `pending` is the rest of the filtered view. It ships inside a
/// `<template>` and the page script moves it into the grid one batch at a
/// time as the viewer scrolls.
pub fn render_page(
    config: &GalleryConfig,
    filter: Filter,
    surface: &HtmlSurface,
    pending: &[RenderUnit],
) -> Markup {
    let title = &config.gallery.title;
    let status = surface.status().map(|s| s.message()).unwrap_or_default();

    let content = html! {
        (site_header(title, &config.theme.name))
        (render_filter_bar(filter))
        main {
            div #gallery .masonry
                data-batch-size=(config.gallery.batch_size)
                data-scroll-threshold=(config.gallery.scroll_threshold) {
                (surface.render_units())
            }
            template #pending {
                @for unit in pending {
                    (render_unit(unit))
                }
            }
            p #loadStatus .load-status
                data-more=(LoadStatus::More.message())
                data-done=(LoadStatus::AllLoaded.message()) { (status) }
        }
        (lightbox_overlay())
    };

    base_document(title, &config.theme.name, content)
}

/// Write a rendered page into `output_dir`, creating it if needed.
pub fn write_page(output_dir: &Path, filter: Filter, page: Markup) -> Result<PathBuf, PageError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(page_filename(filter));
    fs::write(&path, page.into_string())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::catalog::Catalog;
    use crate::gallery::{Gallery, GalleryState};
    use crate::surface::Surface;
    use crate::test_helpers::entry;
    use tempfile::TempDir;

    fn surface_with(names: &[&str], status: LoadStatus) -> HtmlSurface {
        let mut surface = HtmlSurface::new();
        for name in names {
            surface.append(RenderUnit::from_entry(&entry(name)));
        }
        surface.set_status(status);
        surface
    }

    #[test]
    fn page_filenames() {
        assert_eq!(page_filename(Filter::All), "index.html");
        assert_eq!(
            page_filename(Filter::Only(Category::Portraits)),
            "portraits.html"
        );
    }

    #[test]
    fn filter_bar_marks_only_active() {
        let html = render_filter_bar(Filter::Only(Category::Ai)).into_string();
        assert_eq!(html.matches("filter active").count(), 1);
        assert!(html.contains(r#"<a class="filter active" href="ai.html" data-filter="ai">ai</a>"#));
        assert!(html.contains(r#"href="index.html""#));
        assert_eq!(html.matches("<a ").count(), 6);
    }

    #[test]
    fn page_contains_units_and_status() {
        let surface = surface_with(&["john_portrait.png", "anna_portrait.jpg"], LoadStatus::More);
        let html = render_page(&GalleryConfig::default(), Filter::All, &surface, &[]).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Photo Wall</title>"));
        assert_eq!(html.matches(r#"class="masonry-item""#).count(), 2);
        assert!(html.contains("Scroll down to load more…"));
        assert!(html.contains(r#"id="lightbox""#));
    }

    #[test]
    fn page_applies_theme_class() {
        let mut config = GalleryConfig::default();
        config.theme.name = "sepia".to_string();
        let surface = surface_with(&[], LoadStatus::AllLoaded);
        let html = render_page(&config, Filter::All, &surface, &[]).into_string();
        assert!(html.contains(r#"<body class="sepia">"#));
        assert!(html.contains(r#"<option value="sepia" selected>sepia</option>"#));
    }

    #[test]
    fn failed_page_shows_failure_message() {
        let surface = surface_with(&[], LoadStatus::Failed);
        let html = render_page(&GalleryConfig::default(), Filter::All, &surface, &[]).into_string();
        assert!(html.contains("Failed to load images."));
        assert!(!html.contains(r#"class="masonry-item""#));
    }

    #[test]
    fn lightbox_starts_hidden() {
        let html = lightbox_overlay().into_string();
        assert!(html.contains(r#"class="lightbox hidden""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn write_page_creates_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let surface = surface_with(&["before_edit.jpg"], LoadStatus::AllLoaded);
        let page = render_page(
            &GalleryConfig::default(),
            Filter::Only(Category::Edits),
            &surface,
            &[],
        );
        let path = write_page(&out, Filter::Only(Category::Edits), page).unwrap();
        assert_eq!(path, out.join("edits.html"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("before edit"));
    }

    /// The part of the page before the pending template.
    fn visible(html: &str) -> &str {
        html.split(r#"<template id="pending">"#).next().unwrap_or(html)
    }

    #[test]
    fn partial_page_carries_rest_of_view() {
        let catalog = Catalog::new(vec![
            entry("anna_portrait.jpg"),
            entry("john_portrait.png"),
            entry("people_party.jpg"),
        ]);
        let mut config = GalleryConfig::default();
        config.gallery.batch_size = 2;
        config.gallery.scroll_threshold = 300.0;
        let mut gallery = Gallery::new(GalleryState::new(catalog, 2), HtmlSurface::new());
        gallery.start();

        let html = render_page(
            &config,
            Filter::All,
            gallery.surface(),
            &gallery.pending_units(),
        )
        .into_string();

        assert_eq!(visible(&html).matches(r#"class="masonry-item""#).count(), 2);
        assert!(!visible(&html).contains("people_party.jpg"));
        assert!(html.contains(r#"<template id="pending"><div class="masonry-item" data-category="portraits"><img src="https://raw.example.test/images/people_party.jpg""#));
        assert!(html.contains(r#"data-batch-size="2""#));
        assert!(html.contains(r#"data-scroll-threshold="300""#));
        assert!(html.contains(r#"data-done="All loaded.""#));
        assert!(visible(&html).contains("Scroll down to load more…"));
    }

    #[test]
    fn complete_page_has_empty_template() {
        let surface = surface_with(&["before_edit.jpg"], LoadStatus::AllLoaded);
        let html = render_page(&GalleryConfig::default(), Filter::All, &surface, &[]).into_string();
        assert!(html.contains(r#"<template id="pending"></template>"#));
    }
}
