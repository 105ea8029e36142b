//! Display surfaces: where rendered units and the status line end up.
//!
//! The renderer only knows the [`Surface`] trait. [`HtmlSurface`] is the
//! concrete surface used by the CLI; it keeps the units it was given and
//! turns each one into a `masonry-item` block with maud.

use crate::catalog::ImageEntry;
use crate::category::Category;
use crate::naming;
use maud::{Markup, html};
use std::fmt;

/// What the lightbox should show when a unit is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxTrigger {
    pub url: String,
    pub caption: String,
}

/// One rendered gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderUnit {
    pub name: String,
    /// Cleaned caption shown under the image.
    pub caption: String,
    pub source_url: String,
    pub category: Category,
    pub trigger: LightboxTrigger,
}

impl RenderUnit {
    pub fn from_entry(entry: &ImageEntry) -> Self {
        Self {
            name: entry.name.clone(),
            caption: naming::caption(&entry.name),
            source_url: entry.source_url.clone(),
            category: entry.category,
            trigger: LightboxTrigger {
                url: entry.source_url.clone(),
                caption: entry.name.clone(),
            },
        }
    }
}

/// The status line shown below the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    More,
    AllLoaded,
    Failed,
}

impl LoadStatus {
    pub fn message(self) -> &'static str {
        match self {
            LoadStatus::More => "Scroll down to load more…",
            LoadStatus::AllLoaded => "All loaded.",
            LoadStatus::Failed => {
                "Failed to load images. Make sure owner and repo are set in the gallery config and the repo is public."
            }
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Append-only item container plus a single status slot.
pub trait Surface {
    fn append(&mut self, unit: RenderUnit);
    /// Remove every unit.
    fn clear(&mut self);
    fn set_status(&mut self, status: LoadStatus);
}

/// Surface that renders to HTML.
#[derive(Debug, Default)]
pub struct HtmlSurface {
    units: Vec<RenderUnit>,
    status: Option<LoadStatus>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[RenderUnit] {
        &self.units
    }

    pub fn status(&self) -> Option<LoadStatus> {
        self.status
    }

    /// All units as gallery markup, in display order.
    pub fn render_units(&self) -> Markup {
        html! {
            @for unit in &self.units {
                (render_unit(unit))
            }
        }
    }
}

impl Surface for HtmlSurface {
    fn append(&mut self, unit: RenderUnit) {
        self.units.push(unit);
    }

    fn clear(&mut self) {
        self.units.clear();
    }

    fn set_status(&mut self, status: LoadStatus) {
        self.status = Some(status);
    }
}

/// A single gallery item. The lightbox script reads the `data-full` and
/// `data-caption` attributes; `show` is added by the script for the reveal
/// transition.
pub fn render_unit(unit: &RenderUnit) -> Markup {
    html! {
        div.masonry-item data-category=(unit.category.as_str()) {
            img src=(unit.source_url) alt=(unit.name) loading="lazy"
                data-full=(unit.trigger.url) data-caption=(unit.trigger.caption);
            p { (unit.caption) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::entry;

    #[test]
    fn unit_from_entry_cleans_caption() {
        let unit = RenderUnit::from_entry(&entry("sunset_landscape.jpg"));
        assert_eq!(unit.caption, "sunset landscape");
        assert_eq!(unit.trigger.caption, "sunset_landscape.jpg");
        assert_eq!(unit.trigger.url, unit.source_url);
        assert_eq!(unit.category, Category::Landscape);
    }

    #[test]
    fn status_messages() {
        assert_eq!(LoadStatus::AllLoaded.to_string(), "All loaded.");
        assert_eq!(LoadStatus::More.to_string(), "Scroll down to load more…");
        assert!(LoadStatus::Failed.message().starts_with("Failed to load images."));
    }

    #[test]
    fn html_surface_appends_and_clears() {
        let mut surface = HtmlSurface::new();
        surface.append(RenderUnit::from_entry(&entry("a.jpg")));
        surface.append(RenderUnit::from_entry(&entry("b.jpg")));
        assert_eq!(surface.units().len(), 2);

        surface.clear();
        assert!(surface.units().is_empty());
        assert_eq!(surface.status(), None);
    }

    #[test]
    fn unit_markup_carries_lightbox_data() {
        let html = render_unit(&RenderUnit::from_entry(&entry("john_portrait.png"))).into_string();
        assert!(html.contains(r#"class="masonry-item""#));
        assert!(html.contains(r#"data-category="portraits""#));
        assert!(html.contains(r#"data-full="https://raw.example.test/images/john_portrait.png""#));
        assert!(html.contains(r#"data-caption="john_portrait.png""#));
        assert!(html.contains("<p>john portrait</p>"));
    }

    #[test]
    fn unit_markup_escapes_names() {
        let html = render_unit(&RenderUnit::from_entry(&entry("<b>.jpg"))).into_string();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
