//! Compiled-in canon reference data.

/// Canon section a book belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Testament {
    Old,
    New,
}

/// One book of the canon. The 1-based book number is its position in the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub chapters: u16,
    pub testament: Testament,
}

impl BookDescriptor {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        chapters: u16,
        testament: Testament,
    ) -> Self {
        Self {
            id,
            name,
            chapters,
            testament,
        }
    }
}

pub const CANON_BOOK_COUNT: usize = 66;
pub const OLD_TESTAMENT_BOOK_COUNT: usize = 39;
pub const CANON_CHAPTER_COUNT: u32 = 1189;

const fn ot(id: &'static str, name: &'static str, chapters: u16) -> BookDescriptor {
    BookDescriptor::new(id, name, chapters, Testament::Old)
}

const fn nt(id: &'static str, name: &'static str, chapters: u16) -> BookDescriptor {
    BookDescriptor::new(id, name, chapters, Testament::New)
}

/// Protestant 66-book canon, Old Testament first.
pub static CANON: [BookDescriptor; CANON_BOOK_COUNT] = [
    ot("Gen", "Génesis", 50),
    ot("Exo", "Éxodo", 40),
    ot("Lev", "Levítico", 27),
    ot("Num", "Números", 36),
    ot("Deu", "Deuteronomio", 34),
    ot("Jos", "Josué", 24),
    ot("Jdg", "Jueces", 21),
    ot("Rut", "Rut", 4),
    ot("1Sa", "1 Samuel", 31),
    ot("2Sa", "2 Samuel", 24),
    ot("1Ki", "1 Reyes", 22),
    ot("2Ki", "2 Reyes", 25),
    ot("1Ch", "1 Crónicas", 29),
    ot("2Ch", "2 Crónicas", 36),
    ot("Ezr", "Esdras", 10),
    ot("Neh", "Nehemías", 13),
    ot("Est", "Ester", 10),
    ot("Job", "Job", 42),
    ot("Psa", "Salmos", 150),
    ot("Pro", "Proverbios", 31),
    ot("Ecc", "Eclesiastés", 12),
    ot("Sng", "Cantares", 8),
    ot("Isa", "Isaías", 66),
    ot("Jer", "Jeremías", 52),
    ot("Lam", "Lamentaciones", 5),
    ot("Eze", "Ezequiel", 48),
    ot("Dan", "Daniel", 12),
    ot("Hos", "Oseas", 14),
    ot("Joe", "Joel", 3),
    ot("Amo", "Amós", 9),
    ot("Oba", "Abdías", 1),
    ot("Jon", "Jonás", 4),
    ot("Mic", "Miqueas", 7),
    ot("Nah", "Nahúm", 3),
    ot("Hab", "Habacuc", 3),
    ot("Zep", "Sofonías", 3),
    ot("Hag", "Hageo", 2),
    ot("Zec", "Zacarías", 14),
    ot("Mal", "Malaquías", 4),
    nt("Mat", "Mateo", 28),
    nt("Mar", "Marcos", 16),
    nt("Luk", "Lucas", 24),
    nt("Jhn", "Juan", 21),
    nt("Act", "Hechos", 28),
    nt("Rom", "Romanos", 16),
    nt("1Co", "1 Corintios", 16),
    nt("2Co", "2 Corintios", 13),
    nt("Gal", "Gálatas", 6),
    nt("Eph", "Efesios", 6),
    nt("Php", "Filipenses", 4),
    nt("Col", "Colosenses", 4),
    nt("1Th", "1 Tesalonicenses", 5),
    nt("2Th", "2 Tesalonicenses", 3),
    nt("1Ti", "1 Timoteo", 6),
    nt("2Ti", "2 Timoteo", 4),
    nt("Tit", "Tito", 3),
    nt("Phm", "Filemón", 1),
    nt("Heb", "Hebreos", 13),
    nt("Jas", "Santiago", 5),
    nt("1Pe", "1 Pedro", 5),
    nt("2Pe", "2 Pedro", 3),
    nt("1Jn", "1 Juan", 5),
    nt("2Jn", "2 Juan", 1),
    nt("3Jn", "3 Juan", 1),
    nt("Jud", "Judas", 1),
    nt("Rev", "Apocalipsis", 22),
];

/// Read-only, ordered view over a book table.
pub trait BookCatalog {
    fn book_count(&self) -> u16;

    /// Book by zero-based position.
    fn book_at(&self, index: u16) -> Option<&BookDescriptor>;

    fn books_in(&self, testament: Testament) -> TestamentBooks<'_>;
}

impl BookCatalog for [BookDescriptor] {
    fn book_count(&self) -> u16 {
        self.len().clamp(0, u16::MAX as usize) as u16
    }

    fn book_at(&self, index: u16) -> Option<&BookDescriptor> {
        self.get(index as usize)
    }

    fn books_in(&self, testament: Testament) -> TestamentBooks<'_> {
        TestamentBooks {
            books: self.iter(),
            testament,
        }
    }
}

/// Iterator over the books of one testament, in canon order.
#[derive(Clone, Debug)]
pub struct TestamentBooks<'a> {
    books: core::slice::Iter<'a, BookDescriptor>,
    testament: Testament,
}

impl<'a> Iterator for TestamentBooks<'a> {
    type Item = &'a BookDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let testament = self.testament;
        self.books.find(|book| book.testament == testament)
    }
}
