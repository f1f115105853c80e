//! Flat chapter index <-> (book, chapter) mapping for continuous paging.
//!
//! A chapter index enumerates every chapter of every book in table order,
//! starting at zero. The permissive operations never fail and substitute the
//! first book / chapter 1 / index 0 for invalid input; the `try_*` variants
//! report the problem instead.

use log::debug;

use crate::canon::{BookDescriptor, CANON};

mod pager;

pub use pager::ChapterPager;

/// A chapter position as `(book id, 1-based chapter)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChapterLocation<'a> {
    pub book_id: &'a str,
    pub chapter: u16,
}

impl<'a> ChapterLocation<'a> {
    pub const fn new(book_id: &'a str, chapter: u16) -> Self {
        Self { book_id, chapter }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationError {
    UnknownBook,
    ChapterOutOfRange,
    IndexOutOfRange,
}

/// Stateless mapper over an injected, ordered book table.
#[derive(Clone, Copy, Debug)]
pub struct ChapterIndexMapper<'a> {
    books: &'a [BookDescriptor],
}

impl ChapterIndexMapper<'static> {
    pub const fn canonical() -> Self {
        Self { books: &CANON }
    }
}

impl Default for ChapterIndexMapper<'static> {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<'a> ChapterIndexMapper<'a> {
    pub const fn new(books: &'a [BookDescriptor]) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &'a [BookDescriptor] {
        self.books
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.books
            .iter()
            .position(|book| book.id.eq_ignore_ascii_case(id))
    }

    /// Chapters preceding the matching book, or `None` for an unknown id.
    fn chapters_before(&self, id: &str) -> Option<(u32, &'a BookDescriptor)> {
        let mut offset = 0u32;
        for book in self.books {
            if book.id.eq_ignore_ascii_case(id) {
                return Some((offset, book));
            }
            offset = offset.saturating_add(u32::from(book.chapters));
        }
        None
    }

    pub fn book_for_id(&self, id: &str) -> Option<&'a BookDescriptor> {
        self.position_of(id).map(|position| &self.books[position])
    }

    /// 1-based book number. Unknown ids map to the first book.
    pub fn number_for_book_id(&self, id: &str) -> u16 {
        match self.position_of(id) {
            Some(position) => (position + 1).clamp(1, u16::MAX as usize) as u16,
            None => {
                debug!("canon-nav: number_for_book_id unknown id={:?} fallback=1", id);
                1
            }
        }
    }

    pub fn id_for_number(&self, number: u16) -> Option<&'a str> {
        let position = (number as usize).checked_sub(1)?;
        self.books.get(position).map(|book| book.id)
    }

    /// Display name for `id`; unknown ids are returned unchanged.
    pub fn name_for_id<'s>(&self, id: &'s str) -> &'s str {
        self.book_for_id(id).map(|book| book.name).unwrap_or(id)
    }

    pub fn total_chapter_count(&self) -> u32 {
        self.books
            .iter()
            .map(|book| u32::from(book.chapters))
            .fold(0u32, u32::saturating_add)
    }

    pub fn try_location_for_index(&self, index: u32) -> Result<ChapterLocation<'a>, NavigationError> {
        let mut remaining = index;
        for book in self.books {
            let chapters = u32::from(book.chapters);
            if remaining < chapters {
                // remaining < chapters <= u16::MAX
                return Ok(ChapterLocation::new(book.id, remaining as u16 + 1));
            }
            remaining -= chapters;
        }
        Err(NavigationError::IndexOutOfRange)
    }

    /// Location for a flat index. Out-of-range indices map to the first
    /// book's first chapter.
    pub fn location_for_index(&self, index: u32) -> ChapterLocation<'a> {
        match self.try_location_for_index(index) {
            Ok(location) => location,
            Err(_) => {
                let fallback = self.first_location();
                debug!(
                    "canon-nav: location_for_index out_of_range index={} total={} fallback={}:{}",
                    index,
                    self.total_chapter_count(),
                    fallback.book_id,
                    fallback.chapter
                );
                fallback
            }
        }
    }

    pub fn try_index_for_location(&self, book_id: &str, chapter: u16) -> Result<u32, NavigationError> {
        let (offset, book) = self
            .chapters_before(book_id)
            .ok_or(NavigationError::UnknownBook)?;
        if chapter == 0 || chapter > book.chapters {
            return Err(NavigationError::ChapterOutOfRange);
        }
        Ok(offset.saturating_add(u32::from(chapter - 1)))
    }

    /// Flat index for a location. Chapter numbers below 1 count as 1 and an
    /// unknown book yields `0`. Chapters past the end of the book are not
    /// clamped and spill into the following books.
    pub fn index_for_location(&self, book_id: &str, chapter: u16) -> u32 {
        match self.chapters_before(book_id) {
            Some((offset, _)) => offset.saturating_add(u32::from(chapter.saturating_sub(1))),
            None => {
                debug!(
                    "canon-nav: index_for_location unknown book={:?} chapter={} fallback=0",
                    book_id, chapter
                );
                0
            }
        }
    }

    /// Following chapter, crossing book boundaries. `None` at the end of the canon.
    pub fn next_location(&self, book_id: &str, chapter: u16) -> Option<ChapterLocation<'a>> {
        let next = self.index_for_location(book_id, chapter).checked_add(1)?;
        if next < self.total_chapter_count() {
            Some(self.location_for_index(next))
        } else {
            None
        }
    }

    /// Preceding chapter, crossing book boundaries. `None` before the first chapter.
    pub fn previous_location(&self, book_id: &str, chapter: u16) -> Option<ChapterLocation<'a>> {
        let previous = self.index_for_location(book_id, chapter).checked_sub(1)?;
        Some(self.location_for_index(previous))
    }

    fn first_location(&self) -> ChapterLocation<'a> {
        ChapterLocation::new(self.books.first().map(|book| book.id).unwrap_or(""), 1)
    }
}
