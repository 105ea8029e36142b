//! Batch rendering.
//!
//! Each call draws the next slice of the filtered view and reports where the
//! cursor ended up. The renderer never clears the surface; resetting is the
//! caller's job (see [`crate::gallery::Gallery::set_filter`]).

use crate::catalog::{Catalog, ImageEntry};
use crate::category::Filter;
use crate::surface::{LoadStatus, RenderUnit, Surface};

/// Result of one [`render_batch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Units appended by this call.
    pub rendered: usize,
    /// Cursor after the call.
    pub cursor: usize,
    pub status: LoadStatus,
}

/// The catalog entries the filter lets through, in catalog order.
pub fn filtered(catalog: &Catalog, filter: Filter) -> impl Iterator<Item = &ImageEntry> {
    catalog
        .entries()
        .iter()
        .filter(move |e| filter.matches(e.category))
}

pub fn filtered_len(catalog: &Catalog, filter: Filter) -> usize {
    filtered(catalog, filter).count()
}

/// Append up to `batch_size` units starting at `cursor` and update the status.
pub fn render_batch(
    catalog: &Catalog,
    filter: Filter,
    cursor: usize,
    batch_size: usize,
    surface: &mut dyn Surface,
) -> BatchOutcome {
    let total = filtered_len(catalog, filter);
    let mut rendered = 0;
    for entry in filtered(catalog, filter).skip(cursor).take(batch_size) {
        surface.append(RenderUnit::from_entry(entry));
        rendered += 1;
    }

    let cursor = cursor + rendered;
    let status = if cursor >= total {
        LoadStatus::AllLoaded
    } else {
        LoadStatus::More
    };
    surface.set_status(status);

    BatchOutcome {
        rendered,
        cursor,
        status,
    }
}
