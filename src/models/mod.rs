pub mod config;
pub mod entry;
pub mod sort_by;

pub use config::AppConfig;
pub use entry::{ColorEntry, TextColor};
pub use sort_by::SortBy;
