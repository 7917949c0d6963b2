// src/data.rs
//
// Shapes that flow through a run:
//
// - Direction:       which of the three dictionaries an entry belongs to.
// - DirectionLinks:  letter-page URLs found on the landing page, per direction.
// - Vocabulary:      word -> entry id for one direction, merged across pages.
// - DataSet:         the three vocabularies of a finished crawl.
// - VocabularyRow:   one persisted row, with the normalized search columns.
//
// Everything here is built once per run and never mutated after hand-off.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::core::normalize;
use crate::error::Error;

/// The site's own numeric id for a dictionary entry.
pub type EntryId = i64;

/// word -> entry id, in first-seen order.
/// Re-inserting a word replaces its id but keeps its position.
pub type Vocabulary = IndexMap<String, EntryId>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    RusBel = 1,
    BelRus = 2,
    BelDef = 3,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::RusBel, Direction::BelRus, Direction::BelDef];

    /// Value stored in the `lang_id` column.
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Path under the base URL where this direction's letter pages live.
    pub fn path_prefix(self) -> &'static str {
        match self {
            Direction::RusBel => "bukva/",
            Direction::BelRus => "litara/",
            Direction::BelDef => "litara-tsbm/",
        }
    }

    /// Short name used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Direction::RusBel => "rus-bel",
            Direction::BelRus => "bel-rus",
            Direction::BelDef => "bel-def",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::RusBel => "russian-to-belarusian",
            Direction::BelRus => "belarusian-to-russian",
            Direction::BelDef => "belarusian-definition",
        })
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.slug() == wanted || d.to_string() == wanted)
            .ok_or_else(|| Error::UnknownDirection(s!(s)))
    }
}

/// Letter-page URLs per direction, in the order the landing page lists them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionLinks {
    rus_bel: Vec<String>,
    bel_rus: Vec<String>,
    bel_def: Vec<String>,
}

impl DirectionLinks {
    pub fn get(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::RusBel => &self.rus_bel,
            Direction::BelRus => &self.bel_rus,
            Direction::BelDef => &self.bel_def,
        }
    }

    pub fn push(&mut self, direction: Direction, url: String) {
        match direction {
            Direction::RusBel => self.rus_bel.push(url),
            Direction::BelRus => self.bel_rus.push(url),
            Direction::BelDef => self.bel_def.push(url),
        }
    }

    pub fn total(&self) -> usize {
        self.rus_bel.len() + self.bel_rus.len() + self.bel_def.len()
    }
}

/// One row of the `vocabulary` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyRow {
    pub word: String,
    pub entry_id: EntryId,
    pub direction: Direction,
    pub lword: String,
    pub first_char: String,
    pub word_mask: String,
}

impl VocabularyRow {
    /// Build a row from a scraped word, filling in the search columns.
    /// Returns `None` for an empty word.
    pub fn new(word: &str, entry_id: EntryId, direction: Direction) -> Option<Self> {
        let norm = normalize::normalize(word);
        let first_char = norm.first_char?;
        Some(Self {
            word: s!(word),
            entry_id,
            direction,
            lword: norm.lword,
            first_char: first_char.to_string(),
            word_mask: norm.word_mask,
        })
    }
}

/// Output of a complete crawl: one vocabulary per direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub vocabularies: Vec<(Direction, Vocabulary)>,
}

impl DataSet {
    pub fn vocabulary(&self, direction: Direction) -> Option<&Vocabulary> {
        self.vocabularies
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, v)| v)
    }

    pub fn total_words(&self) -> usize {
        self.vocabularies.iter().map(|(_, v)| v.len()).sum()
    }

    /// Rows in insertion order: direction by direction, then vocabulary order.
    /// Empty words are dropped here, before normalization.
    pub fn rows(&self) -> impl Iterator<Item = VocabularyRow> + '_ {
        self.vocabularies.iter().flat_map(|(direction, vocab)| {
            vocab
                .iter()
                .filter_map(move |(word, &id)| VocabularyRow::new(word, id, *direction))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_and_reject_unknown() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_code(d.code()), Some(d));
        }
        assert_eq!(Direction::from_code(0), None);
        assert_eq!(Direction::from_code(4), None);
    }

    #[test]
    fn parses_slugs_and_long_names() {
        assert_eq!("bel-def".parse::<Direction>().unwrap(), Direction::BelDef);
        assert_eq!("Belarusian-To-Russian".parse::<Direction>().unwrap(), Direction::BelRus);
        assert!(matches!(
            "eng-bel".parse::<Direction>(),
            Err(Error::UnknownDirection(s)) if s == "eng-bel"
        ));
    }

    #[test]
    fn links_keep_per_direction_order() {
        let mut links = DirectionLinks::default();
        links.push(Direction::BelRus, s!("b1"));
        links.push(Direction::RusBel, s!("r1"));
        links.push(Direction::BelRus, s!("b2"));
        assert_eq!(links.get(Direction::BelRus), ["b1", "b2"]);
        assert_eq!(links.get(Direction::RusBel), ["r1"]);
        assert!(links.get(Direction::BelDef).is_empty());
        assert_eq!(links.total(), 3);
    }

    #[test]
    fn row_fills_search_columns() {
        let row = VocabularyRow::new("Ведзь", 7, Direction::BelRus).unwrap();
        assert_eq!(row.word, "Ведзь");
        assert_eq!(row.lword, "ведзь");
        assert_eq!(row.first_char, "в");
        assert_eq!(row.word_mask, "вёдзь");
        assert!(VocabularyRow::new("", 7, Direction::BelRus).is_none());
    }

    #[test]
    fn dataset_rows_follow_direction_then_vocabulary_order() {
        let mut a = Vocabulary::new();
        a.insert(s!("Б"), 2);
        a.insert(s!("А"), 1);
        a.insert(s!(""), 9);
        let mut b = Vocabulary::new();
        b.insert(s!("В"), 3);
        let ds = DataSet {
            vocabularies: vec![(Direction::RusBel, a), (Direction::BelDef, b)],
        };

        let got: Vec<(String, EntryId, Direction)> =
            ds.rows().map(|r| (r.word, r.entry_id, r.direction)).collect();
        assert_eq!(
            got,
            vec![
                (s!("Б"), 2, Direction::RusBel),
                (s!("А"), 1, Direction::RusBel),
                (s!("В"), 3, Direction::BelDef),
            ]
        );
        assert_eq!(ds.total_words(), 4);
        assert!(ds.vocabulary(Direction::BelRus).is_none());
    }
}
