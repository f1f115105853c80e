//! Scripture citation detection in free text (`Juan 3:16`, `1 Co 13.4`).
//!
//! A citation is an optional `1`-`3` book prefix with an optional space, a
//! book word made of one uppercase letter followed by 1-11 lowercase letters
//! (Spanish accents included), an optional `.`, an optional space, a 1-3 digit
//! chapter, `:` or `.`, and a 1-3 digit verse. The book word is resolved
//! through a table of common abbreviations first, then by prefix against the
//! catalog display names. Matches whose book cannot be resolved are skipped.

use log::debug;

use crate::{
    canon::{BookDescriptor, CANON},
    text_policy::reference_label,
};

const MAX_NUMBER_DIGITS: usize = 3;
const MIN_BOOK_TAIL: usize = 1;
const MAX_BOOK_TAIL: usize = 11;

/// Abbreviations and full names seen in Spanish study notes, mapped to book ids.
#[rustfmt::skip]
static ABBREVIATIONS: &[(&str, &str)] = &[
    ("Gén", "Gen"), ("Gen", "Gen"), ("Génesis", "Gen"),
    ("Éxo", "Exo"), ("Exo", "Exo"), ("Éxodo", "Exo"),
    ("Lev", "Lev"), ("Levítico", "Lev"),
    ("Núm", "Num"), ("Num", "Num"), ("Números", "Num"),
    ("Deu", "Deu"), ("Deut", "Deu"), ("Deuteronomio", "Deu"),
    ("Jos", "Jos"), ("Josué", "Jos"),
    ("Jue", "Jdg"), ("Jueces", "Jdg"),
    ("Rut", "Rut"),
    ("1Sa", "1Sa"), ("1 Sa", "1Sa"), ("1 Samuel", "1Sa"),
    ("2Sa", "2Sa"), ("2 Sa", "2Sa"), ("2 Samuel", "2Sa"),
    ("1Re", "1Ki"), ("1 Re", "1Ki"), ("1 Reyes", "1Ki"),
    ("2Re", "2Ki"), ("2 Re", "2Ki"), ("2 Reyes", "2Ki"),
    ("1Cr", "1Ch"), ("1 Cr", "1Ch"), ("1 Crónicas", "1Ch"),
    ("2Cr", "2Ch"), ("2 Cr", "2Ch"), ("2 Crónicas", "2Ch"),
    ("Esd", "Ezr"), ("Esdras", "Ezr"),
    ("Neh", "Neh"), ("Nehemías", "Neh"),
    ("Est", "Est"), ("Ester", "Est"),
    ("Job", "Job"),
    ("Sal", "Psa"), ("Salmos", "Psa"), ("Ps", "Psa"),
    ("Pro", "Pro"), ("Prov", "Pro"), ("Proverbios", "Pro"),
    ("Ecl", "Ecc"), ("Eclesiastés", "Ecc"),
    ("Cant", "Sng"), ("Cantares", "Sng"),
    ("Isa", "Isa"), ("Isaías", "Isa"),
    ("Jer", "Jer"), ("Jeremías", "Jer"),
    ("Lam", "Lam"), ("Lamentaciones", "Lam"),
    ("Eze", "Eze"), ("Ezequiel", "Eze"),
    ("Dan", "Dan"), ("Daniel", "Dan"),
    ("Hos", "Hos"), ("Oseas", "Hos"),
    ("Joe", "Joe"), ("Joel", "Joe"),
    ("Amó", "Amo"), ("Amo", "Amo"), ("Amós", "Amo"),
    ("Abd", "Oba"), ("Abdías", "Oba"),
    ("Jon", "Jon"), ("Jonás", "Jon"),
    ("Miq", "Mic"), ("Miqueas", "Mic"),
    ("Nah", "Nah"), ("Nahúm", "Nah"),
    ("Hab", "Hab"), ("Habacuc", "Hab"),
    ("Sof", "Zep"), ("Sofonías", "Zep"),
    ("Hag", "Hag"), ("Hageo", "Hag"),
    ("Zac", "Zec"), ("Zacarías", "Zec"),
    ("Mal", "Mal"), ("Malaquías", "Mal"),
    ("Mat", "Mat"), ("Mt", "Mat"), ("Mateo", "Mat"),
    ("Mar", "Mar"), ("Mc", "Mar"), ("Marcos", "Mar"),
    ("Luc", "Luk"), ("Lc", "Luk"), ("Lucas", "Luk"),
    ("Jua", "Jhn"), ("Jn", "Jhn"), ("Juan", "Jhn"),
    ("Hech", "Act"), ("Hch", "Act"), ("Hechos", "Act"),
    ("Rom", "Rom"), ("Ro", "Rom"), ("Romanos", "Rom"),
    ("1Co", "1Co"), ("1 Co", "1Co"), ("1 Corintios", "1Co"),
    ("2Co", "2Co"), ("2 Co", "2Co"), ("2 Corintios", "2Co"),
    ("Gál", "Gal"), ("Gal", "Gal"), ("Gálatas", "Gal"),
    ("Efe", "Eph"), ("Efesios", "Eph"),
    ("Fil", "Php"), ("Filipenses", "Php"),
    ("Col", "Col"), ("Colosenses", "Col"),
    ("1Te", "1Th"), ("1 Ts", "1Th"), ("1 Tesalonicenses", "1Th"),
    ("2Te", "2Th"), ("2 Ts", "2Th"), ("2 Tesalonicenses", "2Th"),
    ("1Tim", "1Ti"), ("1 Ti", "1Ti"), ("1 Timoteo", "1Ti"),
    ("2Tim", "2Ti"), ("2 Ti", "2Ti"), ("2 Timoteo", "2Ti"),
    ("Tit", "Tit"), ("Tito", "Tit"),
    ("Flm", "Phm"), ("Filemón", "Phm"),
    ("Heb", "Heb"), ("Hebreos", "Heb"),
    ("Sant", "Jas"), ("Stgo", "Jas"), ("Santiago", "Jas"),
    ("1Pe", "1Pe"), ("1 Pe", "1Pe"), ("1 Pedro", "1Pe"),
    ("2Pe", "2Pe"), ("2 Pe", "2Pe"), ("2 Pedro", "2Pe"),
    ("1Jn", "1Jn"), ("1 Jn", "1Jn"), ("1 Juan", "1Jn"),
    ("2Jn", "2Jn"), ("2 Jn", "2Jn"), ("2 Juan", "2Jn"),
    ("3Jn", "3Jn"), ("3 Jn", "3Jn"), ("3 Juan", "3Jn"),
    ("Jud", "Jud"), ("Judas", "Jud"),
    ("Apoc", "Rev"), ("Ap", "Rev"), ("Apocalipsis", "Rev"),
];

/// A resolved citation. `raw` borrows the scanned text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParsedCitation<'t, 'b> {
    pub book_id: &'b str,
    pub book_name: &'b str,
    pub chapter: u16,
    pub verse: u16,
    pub raw: &'t str,
}

impl ParsedCitation<'_, '_> {
    /// Normalized display form, e.g. `1 Corintios 13:4`.
    pub fn label<'o>(&self, out: &'o mut [u8]) -> &'o str {
        reference_label(self.book_name, self.chapter, self.verse, out)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct RawMatch {
    start: usize,
    /// End of the book part, excluding a trailing `.`.
    book_end: usize,
    end: usize,
    chapter: u16,
    verse: u16,
}

/// Lazily yields every resolvable citation in `text`, left to right.
#[derive(Clone, Debug)]
pub struct CitationScanner<'t, 'b> {
    text: &'t str,
    cursor: usize,
    books: &'b [BookDescriptor],
}

impl<'t, 'b> CitationScanner<'t, 'b> {
    pub fn new(text: &'t str, books: &'b [BookDescriptor]) -> Self {
        Self {
            text,
            cursor: 0,
            books,
        }
    }

    fn resolve(&self, found: RawMatch) -> Option<ParsedCitation<'t, 'b>> {
        let book_part = &self.text[found.start..found.book_end];
        let Some(book_id) = resolve_book_id(book_part, self.books) else {
            debug!(
                "citation: unresolved book={:?} raw={:?}",
                book_part,
                &self.text[found.start..found.end]
            );
            return None;
        };
        let book_name = self
            .books
            .iter()
            .find(|book| book.id == book_id)
            .map(|book| book.name)
            .unwrap_or(book_id);

        Some(ParsedCitation {
            book_id,
            book_name,
            chapter: found.chapter,
            verse: found.verse,
            raw: &self.text[found.start..found.end],
        })
    }
}

impl<'t, 'b> Iterator for CitationScanner<'t, 'b> {
    type Item = ParsedCitation<'t, 'b>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            match match_at(self.text, self.cursor) {
                Some(found) => {
                    self.cursor = found.end;
                    if let Some(citation) = self.resolve(found) {
                        return Some(citation);
                    }
                }
                None => {
                    let step = self.text[self.cursor..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    self.cursor += step;
                }
            }
        }
        None
    }
}

/// Citations in `text`, resolved against the compiled-in canon.
pub fn find_citations(text: &str) -> CitationScanner<'_, 'static> {
    CitationScanner::new(text, &CANON)
}

fn resolve_book_id<'b>(book_part: &str, books: &'b [BookDescriptor]) -> Option<&'b str> {
    if let Some(id) = ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == book_part)
        .map(|(_, id)| *id)
    {
        // Abbreviations only count when the id exists in the active table.
        if let Some(book) = books.iter().find(|book| book.id == id) {
            return Some(book.id);
        }
    }

    books
        .iter()
        .find(|book| book.id.eq_ignore_ascii_case(book_part))
        .or_else(|| {
            books
                .iter()
                .find(|book| starts_with_ignore_case(book.name, book_part))
        })
        .map(|book| book.id)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars();
    prefix.chars().all(|p| {
        text_chars
            .next()
            .is_some_and(|t| t.to_lowercase().eq(p.to_lowercase()))
    })
}

fn is_book_initial(ch: char) -> bool {
    ch.is_ascii_uppercase() || matches!(ch, 'Á' | 'É' | 'Í' | 'Ó' | 'Ú')
}

fn is_book_tail(ch: char) -> bool {
    ch.is_ascii_lowercase() || ('à'..='ÿ').contains(&ch)
}

fn match_at(text: &str, start: usize) -> Option<RawMatch> {
    match_citation(text, start, true).or_else(|| match_citation(text, start, false))
}

fn match_citation(text: &str, start: usize, numbered_book: bool) -> Option<RawMatch> {
    let bytes = text.as_bytes();
    let mut cursor = start;

    if numbered_book {
        if !matches!(bytes.get(cursor), Some(b'1'..=b'3')) {
            return None;
        }
        cursor += 1;
        if bytes.get(cursor).is_some_and(u8::is_ascii_whitespace) {
            cursor += 1;
        }
    }

    let mut chars = text[cursor..].chars();
    let initial = chars.next().filter(|ch| is_book_initial(*ch))?;
    cursor += initial.len_utf8();

    let mut tail = 0usize;
    for ch in chars {
        if tail == MAX_BOOK_TAIL || !is_book_tail(ch) {
            break;
        }
        cursor += ch.len_utf8();
        tail += 1;
    }
    if tail < MIN_BOOK_TAIL {
        return None;
    }
    let book_end = cursor;

    if bytes.get(cursor) == Some(&b'.') {
        cursor += 1;
    }
    if bytes.get(cursor).is_some_and(u8::is_ascii_whitespace) {
        cursor += 1;
    }

    let (chapter, after_chapter) = read_number(bytes, cursor)?;
    cursor = after_chapter;
    if !matches!(bytes.get(cursor), Some(b':' | b'.')) {
        return None;
    }
    cursor += 1;
    let (verse, end) = read_number(bytes, cursor)?;

    Some(RawMatch {
        start,
        book_end,
        end,
        chapter,
        verse,
    })
}

/// Reads 1-3 ASCII digits starting at `cursor`.
fn read_number(bytes: &[u8], mut cursor: usize) -> Option<(u16, usize)> {
    let mut value = 0u16;
    let mut digits = 0usize;
    while digits < MAX_NUMBER_DIGITS {
        match bytes.get(cursor) {
            Some(digit @ b'0'..=b'9') => {
                value = value * 10 + u16::from(digit - b'0');
                cursor += 1;
                digits += 1;
            }
            _ => break,
        }
    }
    if digits == 0 { None } else { Some((value, cursor)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::Testament;

    fn ids(text: &str) -> Vec<(&'static str, u16, u16)> {
        find_citations(text)
            .map(|c| (c.book_id, c.chapter, c.verse))
            .collect()
    }

    #[test]
    fn finds_plain_citation() {
        let found: Vec<_> = find_citations("Porque de tal manera... Juan 3:16 dice").collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].book_id, "Jhn");
        assert_eq!(found[0].book_name, "Juan");
        assert_eq!(found[0].chapter, 3);
        assert_eq!(found[0].verse, 16);
        assert_eq!(found[0].raw, "Juan 3:16");
    }

    #[test]
    fn accepts_dot_separator_and_abbreviation_dot() {
        assert_eq!(ids("ver Gén. 1.1 y Sal 23:1"), [("Gen", 1, 1), ("Psa", 23, 1)]);
    }

    #[test]
    fn numbered_books_keep_their_prefix() {
        assert_eq!(ids("1 Co 13:4"), [("1Co", 13, 4)]);
        assert_eq!(ids("2Co 5:17"), [("2Co", 5, 17)]);
        assert_eq!(ids("lee 1 Juan 4:8"), [("1Jn", 4, 8)]);
    }

    #[test]
    fn falls_back_to_display_name_prefix() {
        // Not in the abbreviation table, but prefixes "Filemón".
        assert_eq!(ids("Filem 1:6"), [("Phm", 1, 6)]);
        assert_eq!(ids("Apocal 21:4"), [("Rev", 21, 4)]);
    }

    #[test]
    fn unknown_words_are_skipped() {
        assert_eq!(ids("Hora 10:30 y Romanos 8:28"), [("Rom", 8, 28)]);
        assert!(ids("Nada aquí 12").is_empty());
    }

    #[test]
    fn numbers_are_limited_to_three_digits() {
        assert!(ids("Sal 1190:1").is_empty());
        assert_eq!(ids("Sal 119:1050"), [("Psa", 119, 105)]);
    }

    #[test]
    fn long_book_words_do_not_match() {
        // Twelve lowercase letters after the initial.
        assert!(ids("Deuteronomios 6:4").is_empty());
        assert_eq!(ids("Deuteronomio 6:4"), [("Deu", 6, 4)]);
    }

    #[test]
    fn label_uses_display_name() {
        let citation = find_citations("Flm 1:6").next().unwrap();
        let mut buf = [0u8; 32];
        assert_eq!(citation.label(&mut buf), "Filemón 1:6");
    }

    #[test]
    fn resolves_against_injected_table() {
        let books = [BookDescriptor::new("Jhn", "John", 21, Testament::New)];
        let found: Vec<_> = CitationScanner::new("John 1:1, Juan 3:16, Gen 1:1", &books)
            .map(|c| (c.book_id, c.book_name, c.chapter))
            .collect();
        assert_eq!(found, [("Jhn", "John", 1), ("Jhn", "John", 3)]);
    }
}
