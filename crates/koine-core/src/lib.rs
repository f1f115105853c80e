#![cfg_attr(not(test), no_std)]

//! Platform-independent reading logic for the Koine Bible reader: canon
//! reference data, chapter paging, citation detection, caching and streaks.

pub mod cache;
pub mod canon;
pub mod citation;
pub mod cross_refs;
pub mod navigation;
pub mod settings;
pub mod streak;
pub mod text_policy;

pub use canon::{BookCatalog, BookDescriptor, CANON, Testament};
pub use citation::{CitationScanner, ParsedCitation, find_citations};
pub use navigation::{ChapterIndexMapper, ChapterLocation, ChapterPager, NavigationError};
pub use settings::{PersistedState, ReaderConfig, ReadingPosition, SettingsStore};
pub use streak::StreakState;
