pub mod library;
pub mod loader;
pub mod presenter;
pub mod sorted_cache;
pub mod source;

pub use library::{ColorLibrary, LibraryEvent, LibraryState, SharedLibrary};
pub use loader::{FetchOutcome, LibraryLoader, LoadReport};
pub use sorted_cache::SortedCache;
pub use source::{AnySource, ColorPayload, ColorSource, FileSource, HttpSource};
