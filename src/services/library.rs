//! The color library: raw colors and segments plus cached orderings.
//!
//! The library is an explicitly constructed service. The server and CLI
//! create one, wrap it in a [`SharedLibrary`] and hand that to whoever
//! needs it. Observers subscribe to [`LibraryEvent`]s instead of holding
//! back-references.

use indexmap::IndexMap;
use std::sync::Arc;
use swatch_core::{hex, sort, Segments};
use tokio::sync::{broadcast, RwLock};

use super::loader::LoadReport;
use super::sorted_cache::SortedCache;
use crate::models::SortBy;

/// Library handle shared between the server, the loader and handlers
pub type SharedLibrary = Arc<RwLock<ColorLibrary>>;

/// Capacity of the event channel; slow subscribers see `Lagged`.
const EVENT_CAPACITY: usize = 32;

/// Change notifications published by the library
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    /// Raw colors were replaced
    ColorsChanged { count: usize },
    /// Raw segments were replaced
    SegmentsChanged { count: usize },
    /// A combined colors + segments download finished
    Loaded(LoadReport),
}

/// Coarse lifecycle state of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryState {
    /// No raw colors or segments
    Empty,
    /// Raw data present, current ordering not computed yet
    Loaded,
    /// Current ordering is cached
    SortedCached,
}

/// Colors with names, segments, and memoized orderings
pub struct ColorLibrary {
    raw_colors: IndexMap<String, String>,
    raw_segments: Vec<String>,
    segments: Segments,
    sort_by: SortBy,
    ascending: bool,
    cache: SortedCache,
    sort_runs: u64,
    events: broadcast::Sender<LibraryEvent>,
}

impl ColorLibrary {
    pub fn new() -> Self {
        Self::with_sort(SortBy::default(), true)
    }

    /// Create an empty library with an initial ordering
    pub fn with_sort(sort_by: SortBy, ascending: bool) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            raw_colors: IndexMap::new(),
            raw_segments: Vec::new(),
            segments: Segments::default(),
            sort_by,
            ascending,
            cache: SortedCache::new(),
            sort_runs: 0,
            events,
        }
    }

    /// Wrap into a shared handle
    pub fn into_shared(self) -> SharedLibrary {
        Arc::new(RwLock::new(self))
    }

    /// Replace all colors.
    ///
    /// Entries whose key is not a valid hex color are dropped. Keys are
    /// stored uppercased; when a key appears more than once, in any case,
    /// the first entry wins. Every cached ordering is discarded. Returns
    /// the number of colors stored.
    pub fn set_colors<I, K, V>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut colors = IndexMap::new();
        let mut dropped = 0usize;
        for (key, name) in entries {
            let key = key.into();
            if !hex::is_complete_hex(&key) {
                dropped += 1;
                continue;
            }
            colors.entry(key.to_ascii_uppercase()).or_insert_with(|| name.into());
        }

        self.raw_colors = colors;
        self.cache.clear();

        let count = self.raw_colors.len();
        tracing::debug!(count, dropped, "Library colors replaced");
        let _ = self.events.send(LibraryEvent::ColorsChanged { count });
        count
    }

    /// Replace all colors from bare hex strings; each color is named by its hex.
    pub fn set_color_list<I, S>(&mut self, hexes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_colors(hexes.into_iter().map(|s| {
            let s = s.into().to_ascii_uppercase();
            (s.clone(), s)
        }))
    }

    /// Replace all segments.
    ///
    /// Invalid hex strings are dropped, the rest are stored uppercased.
    /// Only segment orderings are discarded, hue and brightness orderings
    /// do not depend on segments.
    /// Returns the number of segments stored.
    pub fn set_segments<I, S>(&mut self, hexes: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dropped = 0usize;
        self.raw_segments = hexes
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| {
                let valid = hex::is_complete_hex(s);
                if !valid {
                    dropped += 1;
                }
                valid
            })
            .map(|s| s.to_ascii_uppercase())
            .collect();
        self.segments = Segments::from_hex_lossy(&self.raw_segments);
        self.cache.remove(SortBy::Segment);

        let count = self.raw_segments.len();
        tracing::debug!(count, dropped, "Library segments replaced");
        let _ = self.events.send(LibraryEvent::SegmentsChanged { count });
        count
    }

    /// Colors in the current ordering.
    ///
    /// Served from the cache when the current `(sort_by, ascending)` pair
    /// was computed since the last mutation; computed and cached otherwise.
    pub fn colors(&mut self) -> Arc<[String]> {
        if let Some(sorted) = self.cache.get(self.sort_by, self.ascending) {
            tracing::debug!(sort_by = %self.sort_by, ascending = self.ascending, "Sorted colors cache hit");
            return sorted;
        }

        let keys: Vec<&str> = self.raw_colors.keys().map(String::as_str).collect();
        let sorted = match self.sort_by.metric() {
            Some(metric) => sort::sort_hex_by_metric(&keys, metric, self.ascending),
            None => sort::sort_hex_into_segments(&keys, &self.segments, self.ascending),
        };
        self.sort_runs += 1;

        tracing::debug!(
            sort_by = %self.sort_by,
            ascending = self.ascending,
            count = sorted.len(),
            "Sorted colors computed"
        );

        let sorted: Arc<[String]> = sorted.into();
        self.cache
            .store(self.sort_by, self.ascending, Arc::clone(&sorted));
        sorted
    }

    /// Colors in the current ordering, split by nearest segment
    pub fn groups(&mut self) -> Vec<Vec<String>> {
        let colors = self.colors();
        self.segments.group_hex(&colors)
    }

    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn set_ascending(&mut self, ascending: bool) {
        self.ascending = ascending;
    }

    /// Raw colors, hex value to name, in load order
    pub fn raw_colors(&self) -> &IndexMap<String, String> {
        &self.raw_colors
    }

    /// Raw segments in order
    pub fn raw_segments(&self) -> &[String] {
        &self.raw_segments
    }

    /// Parsed segments
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Name stored for a hex value, looked up case-insensitively
    pub fn name_for(&self, hex: &str) -> Option<&str> {
        self.raw_colors
            .get(hex.to_ascii_uppercase().as_str())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.raw_colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_colors.is_empty()
    }

    pub fn state(&self) -> LibraryState {
        if self.raw_colors.is_empty() && self.raw_segments.is_empty() {
            LibraryState::Empty
        } else if self.cache.contains(self.sort_by, self.ascending) {
            LibraryState::SortedCached
        } else {
            LibraryState::Loaded
        }
    }

    /// Whether an ordering is currently cached
    pub fn is_cached(&self, sort_by: SortBy, ascending: bool) -> bool {
        self.cache.contains(sort_by, ascending)
    }

    /// Number of times an ordering was actually computed
    pub fn sort_runs(&self) -> u64 {
        self.sort_runs
    }

    /// Register for change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<LibraryEvent> {
        self.events.subscribe()
    }

    /// Publish the result of a combined download
    pub fn notify_loaded(&self, report: LoadReport) {
        let _ = self.events.send(LibraryEvent::Loaded(report));
    }
}

impl Default for ColorLibrary {
    fn default() -> Self {
        Self::new()
    }
}
