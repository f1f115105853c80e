//! Compiled-in cross references for a handful of well-known verses.

use core::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScriptureReference {
    pub book_id: &'static str,
    pub chapter: u16,
    pub verse: u16,
}

impl ScriptureReference {
    pub const fn new(book_id: &'static str, chapter: u16, verse: u16) -> Self {
        Self {
            book_id,
            chapter,
            verse,
        }
    }
}

impl fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book_id, self.chapter, self.verse)
    }
}

const fn r(book_id: &'static str, chapter: u16, verse: u16) -> ScriptureReference {
    ScriptureReference::new(book_id, chapter, verse)
}

struct CrossReferenceEntry {
    source: ScriptureReference,
    targets: &'static [ScriptureReference],
}

static CROSS_REFERENCES: [CrossReferenceEntry; 6] = [
    CrossReferenceEntry {
        source: r("Gen", 1, 1),
        targets: &[r("Jhn", 1, 1), r("Heb", 11, 3), r("Psa", 33, 6)],
    },
    CrossReferenceEntry {
        source: r("Jhn", 3, 16),
        targets: &[r("Num", 21, 9), r("Rom", 5, 8), r("1Jn", 4, 9)],
    },
    CrossReferenceEntry {
        source: r("Psa", 23, 1),
        targets: &[
            r("Isa", 40, 11),
            r("Jer", 23, 4),
            r("Eze", 34, 11),
            r("Jhn", 10, 11),
            r("1Pe", 2, 25),
        ],
    },
    CrossReferenceEntry {
        source: r("Rom", 8, 28),
        targets: &[r("Gen", 50, 20), r("Jer", 29, 11), r("2Ti", 1, 9)],
    },
    CrossReferenceEntry {
        source: r("Php", 4, 13),
        targets: &[r("Jhn", 15, 5), r("2Co", 12, 9), r("Eph", 3, 16)],
    },
    CrossReferenceEntry {
        source: r("Jer", 29, 11),
        targets: &[r("Psa", 40, 5), r("Isa", 55, 12)],
    },
];

/// References for a verse; empty when none are known. Book ids compare
/// ASCII case-insensitively.
pub fn cross_references(book_id: &str, chapter: u16, verse: u16) -> &'static [ScriptureReference] {
    CROSS_REFERENCES
        .iter()
        .find(|entry| {
            entry.source.book_id.eq_ignore_ascii_case(book_id)
                && entry.source.chapter == chapter
                && entry.source.verse == verse
        })
        .map(|entry| entry.targets)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::ChapterIndexMapper;

    #[test]
    fn known_verse_has_references() {
        let refs = cross_references("Jhn", 3, 16);
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[2], ScriptureReference::new("1Jn", 4, 9));
        assert_eq!(cross_references("jhn", 3, 16), refs);
    }

    #[test]
    fn unknown_verse_is_empty() {
        assert!(cross_references("Jhn", 3, 17).is_empty());
        assert!(cross_references("Xyz", 1, 1).is_empty());
    }

    #[test]
    fn displays_short_form() {
        assert_eq!(
            format!("{}", ScriptureReference::new("Jhn", 3, 16)),
            "Jhn 3:16"
        );
    }

    #[test]
    fn every_target_is_a_valid_chapter() {
        let mapper = ChapterIndexMapper::canonical();
        for entry in &CROSS_REFERENCES {
            for target in core::iter::once(&entry.source).chain(entry.targets) {
                assert!(
                    mapper.try_index_for_location(target.book_id, target.chapter).is_ok(),
                    "{} is not in the canon",
                    target
                );
            }
        }
    }
}
