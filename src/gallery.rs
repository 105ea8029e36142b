//! The gallery controller.
//!
//! [`Gallery`] owns everything that moves while someone browses: the active
//! filter, the cursor, the surface and the lightbox. The catalog itself is
//! fixed once loaded.
//!
//! ```text
//! start()                 → first batch
//! on_viewport_change(vp)  → one more batch if near the bottom and not exhausted
//! set_filter(f)           → clear, cursor = 0, first batch of the new view
//! activate(i)             → lightbox shows the i-th displayed unit
//! ```
//!
//! Scroll loading is guarded only by `cursor < filtered_len`. Rendering is
//! synchronous, so a burst of scroll notifications can neither skip nor
//! duplicate a batch.

use crate::catalog::Catalog;
use crate::category::Filter;
use crate::lightbox::Lightbox;
use crate::render::{self, BatchOutcome};
use crate::surface::{HtmlSurface, LoadStatus, RenderUnit, Surface};
use tracing::debug;

pub const DEFAULT_BATCH_SIZE: usize = 12;
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 1200.0;

/// Browser-style viewport geometry, all in the same unit (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub inner_height: f64,
    pub scroll_y: f64,
    pub content_height: f64,
}

impl Viewport {
    /// A viewport scrolled all the way down.
    pub fn scrolled_to_bottom(inner_height: f64, content_height: f64) -> Self {
        Self {
            inner_height,
            scroll_y: (content_height - inner_height).max(0.0),
            content_height,
        }
    }

    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.inner_height + self.scroll_y >= self.content_height - threshold
    }
}

/// Mutable browsing state, separate from any UI.
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub catalog: Catalog,
    pub filter: Filter,
    pub cursor: usize,
    pub batch_size: usize,
    pub scroll_threshold: f64,
}

impl GalleryState {
    pub fn new(catalog: Catalog, batch_size: usize) -> Self {
        Self {
            catalog,
            filter: Filter::All,
            cursor: 0,
            batch_size,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }

    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    pub fn filtered_len(&self) -> usize {
        render::filtered_len(&self.catalog, self.filter)
    }

    pub fn exhausted(&self) -> bool {
        self.cursor >= self.filtered_len()
    }
}

pub struct Gallery<S: Surface = HtmlSurface> {
    state: GalleryState,
    surface: S,
    lightbox: Lightbox,
    displayed: Vec<usize>,
}

impl<S: Surface> Gallery<S> {
    pub fn new(state: GalleryState, surface: S) -> Self {
        Self {
            state,
            surface,
            lightbox: Lightbox::new(),
            displayed: Vec::new(),
        }
    }

    /// A gallery whose catalog could not be loaded: empty, with the failure
    /// status shown. It stays empty for its whole lifetime.
    pub fn failed(batch_size: usize, mut surface: S) -> Self {
        surface.set_status(LoadStatus::Failed);
        Self::new(GalleryState::new(Catalog::default(), batch_size), surface)
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }

    /// Draw the first batch.
    pub fn start(&mut self) -> BatchOutcome {
        self.render_next()
    }

    /// Switch filters. Always a full reset, even for the current filter.
    pub fn set_filter(&mut self, filter: Filter) -> BatchOutcome {
        debug!(%filter, "filter reset");
        self.state.filter = filter;
        self.surface.clear();
        self.displayed.clear();
        self.state.cursor = 0;
        self.render_next()
    }

    /// Scroll or resize notification.
    pub fn on_viewport_change(&mut self, viewport: Viewport) -> Option<BatchOutcome> {
        if !viewport.near_bottom(self.state.scroll_threshold) || self.state.exhausted() {
            return None;
        }
        Some(self.render_next())
    }

    /// Open the lightbox on the `index`-th displayed unit.
    /// Returns false when nothing is displayed at that position.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(&catalog_index) = self.displayed.get(index) else {
            return false;
        };
        let unit = RenderUnit::from_entry(&self.state.catalog.entries()[catalog_index]);
        self.lightbox.open_trigger(&unit.trigger);
        true
    }

    /// Units of the current view not rendered yet, in display order.
    pub fn pending_units(&self) -> Vec<RenderUnit> {
        render::filtered(&self.state.catalog, self.state.filter)
            .skip(self.state.cursor)
            .map(RenderUnit::from_entry)
            .collect()
    }

    pub fn displayed_count(&self) -> usize {
        self.displayed.len()
    }

    fn render_next(&mut self) -> BatchOutcome {
        let state = &self.state;
        let outcome = render::render_batch(
            &state.catalog,
            state.filter,
            state.cursor,
            state.batch_size,
            &mut self.surface,
        );
        let filter = state.filter;
        let newly_shown: Vec<usize> = state
            .catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| filter.matches(e.category))
            .map(|(i, _)| i)
            .skip(state.cursor)
            .take(outcome.rendered)
            .collect();
        self.displayed.extend(newly_shown);
        self.state.cursor = outcome.cursor;
        debug!(
            rendered = outcome.rendered,
            cursor = outcome.cursor,
            status = ?outcome.status,
            "batch rendered"
        );
        outcome
    }
}
