pub mod date;
pub mod item;
pub mod loader;

pub use date::UploadDate;
pub use item::{FALLBACK_CATEGORY, Item, Score, VIDEO_SOURCE_MARKER};
pub use loader::{DATA_VARIABLE, DataError, load_dataset, parse_dataset};
