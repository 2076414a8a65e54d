//! Symbol dictionary: entries, dataset loading and lookup indexes.
//!
//! ```text
//! dataset.json ──load_dataset──▶ Vec<DictionaryEntry>
//!                                   │
//!                             DictionaryIndex::build     normalized key → entries
//!                                   │
//!                            DictionaryIndex::folded     folded key → entries (cached)
//! ```

pub mod entry;
pub mod folded;
pub mod index;
pub mod loader;

pub use entry::DictionaryEntry;
pub use folded::{FoldedIndex, FoldedKey};
pub use index::{DEFAULT_SYMBOL_LIMIT, DictionaryIndex};
pub use loader::{load_dataset, parse_dataset};
