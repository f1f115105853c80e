use log::debug;

use super::{ChapterIndexMapper, ChapterLocation, NavigationError};
use crate::text_policy::chapter_label;

/// Current page of a swipeable chapter pager.
#[derive(Clone, Copy, Debug)]
pub struct ChapterPager<'a> {
    mapper: ChapterIndexMapper<'a>,
    current: ChapterLocation<'a>,
}

impl<'a> ChapterPager<'a> {
    /// Opens the pager at `(book_id, chapter)`; an invalid position opens the
    /// first chapter.
    pub fn new(mapper: ChapterIndexMapper<'a>, book_id: &str, chapter: u16) -> Self {
        let current = match mapper.try_index_for_location(book_id, chapter) {
            Ok(index) => mapper.location_for_index(index),
            Err(err) => {
                debug!(
                    "canon-nav: pager open invalid book={:?} chapter={} err={:?}",
                    book_id, chapter, err
                );
                mapper.location_for_index(0)
            }
        };
        Self { mapper, current }
    }

    pub fn current(&self) -> ChapterLocation<'a> {
        self.current
    }

    pub fn page_index(&self) -> u32 {
        self.mapper
            .index_for_location(self.current.book_id, self.current.chapter)
    }

    pub fn page_count(&self) -> u32 {
        self.mapper.total_chapter_count()
    }

    /// Settles on the page the pager scrolled to.
    pub fn jump_to_page(&mut self, page: u32) -> ChapterLocation<'a> {
        self.current = self.mapper.location_for_index(page);
        self.current
    }

    /// Jumps to an explicit selection. The current page is kept on error.
    pub fn jump_to(&mut self, book_id: &str, chapter: u16) -> Result<ChapterLocation<'a>, NavigationError> {
        let index = self.mapper.try_index_for_location(book_id, chapter)?;
        self.current = self.mapper.try_location_for_index(index)?;
        Ok(self.current)
    }

    /// Returns `false` at the end of the canon.
    pub fn turn_forward(&mut self) -> bool {
        match self
            .mapper
            .next_location(self.current.book_id, self.current.chapter)
        {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Returns `false` on the first chapter.
    pub fn turn_back(&mut self) -> bool {
        match self
            .mapper
            .previous_location(self.current.book_id, self.current.chapter)
        {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Header label such as `Génesis 1`.
    pub fn title<'b>(&self, out: &'b mut [u8]) -> &'b str {
        let name = self.mapper.name_for_id(self.current.book_id);
        chapter_label(name, self.current.chapter, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_across_book_boundaries() {
        let mut pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Gen", 50);
        assert_eq!(pager.page_index(), 49);

        assert!(pager.turn_forward());
        assert_eq!(pager.current(), ChapterLocation::new("Exo", 1));
        assert_eq!(pager.page_index(), 50);

        assert!(pager.turn_back());
        assert_eq!(pager.current(), ChapterLocation::new("Gen", 50));
    }

    #[test]
    fn stops_at_canon_edges() {
        let mut pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Gen", 1);
        assert!(!pager.turn_back());
        assert_eq!(pager.current(), ChapterLocation::new("Gen", 1));

        let last = pager.page_count() - 1;
        assert_eq!(pager.jump_to_page(last), ChapterLocation::new("Rev", 22));
        assert!(!pager.turn_forward());
        assert_eq!(pager.current(), ChapterLocation::new("Rev", 22));
    }

    #[test]
    fn invalid_open_lands_on_first_chapter() {
        let pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Xyz", 3);
        assert_eq!(pager.current(), ChapterLocation::new("Gen", 1));

        let pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Jhn", 22);
        assert_eq!(pager.current(), ChapterLocation::new("Gen", 1));
    }

    #[test]
    fn open_normalizes_book_id_case() {
        let pager = ChapterPager::new(ChapterIndexMapper::canonical(), "jhn", 3);
        assert_eq!(pager.current(), ChapterLocation::new("Jhn", 3));
    }

    #[test]
    fn rejected_jump_keeps_current_page() {
        let mut pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Psa", 23);
        assert_eq!(pager.jump_to("Psa", 151), Err(NavigationError::ChapterOutOfRange));
        assert_eq!(pager.jump_to("Enoch", 1), Err(NavigationError::UnknownBook));
        assert_eq!(pager.current(), ChapterLocation::new("Psa", 23));

        assert_eq!(pager.jump_to("rom", 8), Ok(ChapterLocation::new("Rom", 8)));
    }

    #[test]
    fn out_of_range_scroll_position_falls_back() {
        let mut pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Mat", 5);
        assert_eq!(pager.jump_to_page(5_000), ChapterLocation::new("Gen", 1));
    }

    #[test]
    fn title_uses_display_name() {
        let pager = ChapterPager::new(ChapterIndexMapper::canonical(), "Exo", 20);
        let mut buf = [0u8; 32];
        assert_eq!(pager.title(&mut buf), "Éxodo 20");
    }
}
