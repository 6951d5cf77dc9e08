//! Display data derived from a library: entries, gradients, closest match.
//!
//! These are the computations a color picker UI performs on top of the
//! library, kept free of any UI so the API and CLI can share them.

use swatch_core::{hex, metrics, Color, SortMetric};

use super::library::ColorLibrary;
use crate::models::{ColorEntry, SortBy};

/// Index in the current ordering of the library color closest to `color`.
///
/// Ties go to the earlier color in the ordering.
pub fn closest_match(library: &mut ColorLibrary, color: Color) -> Option<usize> {
    let candidates: Vec<(usize, Color)> = library
        .colors()
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| hex::parse(s).ok().map(|c| (idx, c)))
        .collect();

    let parsed: Vec<Color> = candidates.iter().map(|&(_, c)| c).collect();
    metrics::index_of_best_match(color, &parsed).map(|best| candidates[best].0)
}

/// Entries for every library color in the current ordering
pub fn entries(library: &mut ColorLibrary, selected: Option<usize>) -> Vec<ColorEntry> {
    let colors = library.colors();
    let library = &*library;
    colors
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| entry(library, idx, s, selected))
        .collect()
}

/// Entry at `index` in the current ordering
pub fn entry_at(
    library: &mut ColorLibrary,
    index: usize,
    selected: Option<usize>,
) -> Option<ColorEntry> {
    let colors = library.colors();
    let s = colors.get(index)?;
    entry(&*library, index, s, selected)
}

fn entry(
    library: &ColorLibrary,
    index: usize,
    s: &str,
    selected: Option<usize>,
) -> Option<ColorEntry> {
    let color = hex::parse(s).ok()?;
    Some(ColorEntry::new(
        s,
        library.name_for(s),
        color,
        selected == Some(index),
    ))
}

/// Hex stops for a gradient behind the color list.
///
/// Sorting by segment shows the segments themselves, any other ordering
/// shows the sorted colors.
pub fn gradient(library: &mut ColorLibrary) -> Vec<String> {
    let stops: Vec<String> = match library.sort_by() {
        SortBy::Segment => library.raw_segments().to_vec(),
        _ => library.colors().to_vec(),
    };
    stops
        .into_iter()
        .filter(|s| hex::is_complete_hex(s))
        .collect()
}

/// Apply picker settings.
///
/// The grouped switch wins over the metric: grouped views always sort by
/// segment.
pub fn apply_view_settings(
    library: &mut ColorLibrary,
    grouped: bool,
    metric: SortMetric,
    ascending: bool,
) {
    let sort_by = if grouped {
        SortBy::Segment
    } else {
        SortBy::from(metric)
    };
    library.set_sort_by(sort_by);
    library.set_ascending(ascending);
}
