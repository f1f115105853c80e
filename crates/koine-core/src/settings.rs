//! Reader defaults and persisted resume state.

use heapless::String;
use log::debug;

use crate::{
    navigation::{ChapterIndexMapper, ChapterLocation},
    streak::{StreakState, local_day},
};

pub const BOOK_ID_BYTES: usize = 8;

/// Defaults applied when no usable state was persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub default_book: &'static str,
    pub default_chapter: u16,
    pub default_verse: u16,
    /// Local time zone offset used for streak day boundaries.
    pub utc_offset_minutes: i16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            default_book: "Gen",
            default_chapter: 1,
            default_verse: 1,
            utc_offset_minutes: 0,
        }
    }
}

impl ReaderConfig {
    /// Local streak day for a Unix timestamp in milliseconds.
    pub fn day_of(&self, unix_ms: i64) -> i64 {
        local_day(unix_ms, self.utc_offset_minutes)
    }
}

/// Last reading position as persisted. The flat chapter index is never
/// stored; it is recomputed from the book and chapter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReadingPosition {
    pub book: String<BOOK_ID_BYTES>,
    pub chapter: u16,
    pub verse: u16,
}

/// A reading position checked against the active book table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedPosition<'a> {
    pub location: ChapterLocation<'a>,
    pub verse: u16,
}

impl ReadingPosition {
    /// Returns `None` when `book_id` exceeds [`BOOK_ID_BYTES`].
    pub fn new(book_id: &str, chapter: u16, verse: u16) -> Option<Self> {
        let mut book = String::new();
        book.push_str(book_id).ok()?;
        Some(Self {
            book,
            chapter,
            verse,
        })
    }

    pub fn from_location(location: ChapterLocation<'_>, verse: u16) -> Option<Self> {
        Self::new(location.book_id, location.chapter, verse)
    }

    /// Normalizes a restored position: a blank or unknown book becomes the
    /// configured default (or the first book), the chapter is clamped into
    /// the book and verse 0 becomes 1. `None` only for an empty book table.
    pub fn resolve<'a>(
        &self,
        mapper: &ChapterIndexMapper<'a>,
        config: &ReaderConfig,
    ) -> Option<ResolvedPosition<'a>> {
        let (book, chapter, verse) = match mapper.book_for_id(self.book.as_str()) {
            Some(book) => (book, self.chapter, self.verse),
            None => {
                let book = mapper
                    .book_for_id(config.default_book)
                    .or_else(|| mapper.books().first())?;
                debug!(
                    "resume: unknown book={:?} fallback={}:{}:{}",
                    self.book.as_str(),
                    book.id,
                    config.default_chapter,
                    config.default_verse
                );
                (book, config.default_chapter, config.default_verse)
            }
        };

        let clamped = chapter.clamp(1, book.chapters.max(1));
        if clamped != chapter {
            debug!(
                "resume: chapter clamped book={} requested={} applied={}",
                book.id, chapter, clamped
            );
        }

        Some(ResolvedPosition {
            location: ChapterLocation::new(book.id, clamped),
            verse: verse.max(1),
        })
    }
}

/// Everything that should survive an app restart.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PersistedState {
    pub position: ReadingPosition,
    pub streak: StreakState,
}

impl PersistedState {
    pub const fn new(position: ReadingPosition, streak: StreakState) -> Self {
        Self { position, streak }
    }
}

/// Abstract persistence backend.
pub trait SettingsStore {
    type Error;

    fn load(&mut self) -> Result<Option<PersistedState>, Self::Error>;
    fn save(&mut self, state: &PersistedState) -> Result<(), Self::Error>;
}

/// Loads the persisted state, resolving it against `mapper`. A missing or
/// unreadable state starts from `config` defaults.
pub fn restore<'a, S: SettingsStore>(
    store: &mut S,
    mapper: &ChapterIndexMapper<'a>,
    config: &ReaderConfig,
) -> (Option<ResolvedPosition<'a>>, StreakState)
where
    S::Error: core::fmt::Debug,
{
    let state = match store.load() {
        Ok(Some(state)) => state,
        Ok(None) => {
            debug!("resume: no saved state");
            PersistedState::default()
        }
        Err(err) => {
            debug!("resume: load failed err={:?}", err);
            PersistedState::default()
        }
    };
    (state.position.resolve(mapper, config), state.streak)
}
