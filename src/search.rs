// src/search.rs
// Read-side lookups over a built database. Each query is shaped to hit one
// of the indexes created in `store::SCHEMA`. Results are ordered by `lword`
// then row id; there is no ranking.

use rusqlite::{Connection, Row, params};

use crate::core::normalize;
use crate::data::{Direction, EntryId};
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    pub word: String,
    pub entry_id: EntryId,
    pub direction: Direction,
}

const COLUMNS: &str = "SELECT word, word_id, lang_id FROM vocabulary";

fn hit(r: &Row<'_>) -> rusqlite::Result<Option<Hit>> {
    let code: i64 = r.get(2)?;
    let Some(direction) = Direction::from_code(code) else { return Ok(None) };
    Ok(Some(Hit { word: r.get(0)?, entry_id: r.get(1)?, direction }))
}

fn collect(rows: impl Iterator<Item = rusqlite::Result<Option<Hit>>>) -> Result<Vec<Hit>> {
    let mut out = Vec::new();
    for r in rows {
        if let Some(h) = r? {
            out.push(h);
        }
    }
    Ok(out)
}

/// Autocomplete: words of one direction starting with `prefix` (case-insensitive).
pub fn by_prefix(conn: &Connection, prefix: &str, direction: Direction, limit: usize) -> Result<Vec<Hit>> {
    let lprefix = prefix.trim().to_lowercase();
    let Some(first) = normalize::first_char(&lprefix) else { return Ok(Vec::new()) };

    let mut stmt = conn.prepare_cached(&format!(
        "{COLUMNS} WHERE first_char = ?1 AND lang_id = ?2 \
         AND substr(lword, 1, ?3) = ?4 ORDER BY lword, id LIMIT ?5"
    ))?;
    let rows = stmt.query_map(
        params![
            first.to_string(),
            direction.code(),
            lprefix.chars().count() as i64,
            lprefix,
            limit as i64
        ],
        hit,
    )?;
    collect(rows)
}

/// Words of one direction equal to `word`, ignoring case.
pub fn exact(conn: &Connection, word: &str, direction: Direction) -> Result<Vec<Hit>> {
    let lword = word.trim().to_lowercase();
    let mut stmt =
        conn.prepare_cached(&format!("{COLUMNS} WHERE lword = ?1 AND lang_id = ?2 ORDER BY lword, id"))?;
    let rows = stmt.query_map(params![lword, direction.code()], hit)?;
    collect(rows)
}

/// Variant-tolerant lookup: words whose mask equals the mask of `word`.
/// With a direction the query is scoped to it, otherwise it spans all three.
/// `first_char` is not used as a filter: it is taken before masking, so
/// "ёлка" and "елка" share a mask but not a first char.
pub fn by_mask(
    conn: &Connection,
    word: &str,
    direction: Option<Direction>,
    limit: usize,
) -> Result<Vec<Hit>> {
    let word = word.trim();
    let mask = normalize::word_mask(word);
    if mask.is_empty() {
        return Ok(Vec::new());
    }

    match direction {
        Some(d) => {
            let mut stmt = conn.prepare_cached(&format!(
                "{COLUMNS} WHERE word_mask = ?1 AND lang_id = ?2 ORDER BY lword, id LIMIT ?3"
            ))?;
            let rows = stmt.query_map(params![mask, d.code(), limit as i64], hit)?;
            collect(rows)
        }
        None => {
            let mut stmt = conn
                .prepare_cached(&format!("{COLUMNS} WHERE word_mask = ?1 ORDER BY lword, id LIMIT ?2"))?;
            let rows = stmt.query_map(params![mask, limit as i64], hit)?;
            collect(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VocabularyRow;
    use crate::store::Store;

    fn seeded() -> Store {
        let mut store = Store::in_memory().unwrap();
        let rows = [
            ("Вецер", 1, Direction::BelRus),
            ("вецер", 2, Direction::BelRus),
            ("Ветер", 3, Direction::RusBel),
            ("Вёска", 4, Direction::BelRus),
            ("Сцяна", 5, Direction::BelRus),
            ("елка", 6, Direction::BelRus),
        ];
        store
            .insert_rows(rows.iter().filter_map(|&(w, id, d)| VocabularyRow::new(w, id, d)))
            .unwrap();
        store
    }

    fn words(hits: &[Hit]) -> Vec<&str> {
        hits.iter().map(|h| h.word.as_str()).collect()
    }

    #[test]
    fn prefix_is_scoped_and_case_insensitive() {
        let store = seeded();
        let hits = by_prefix(store.connection(), "ВЕ", Direction::BelRus, 10).unwrap();
        assert_eq!(words(&hits), ["Вецер", "вецер"]);
        assert!(hits.iter().all(|h| h.direction == Direction::BelRus));

        let limited = by_prefix(store.connection(), "ве", Direction::BelRus, 1).unwrap();
        assert_eq!(limited.len(), 1);
        assert!(by_prefix(store.connection(), "  ", Direction::BelRus, 10).unwrap().is_empty());
    }

    #[test]
    fn exact_ignores_case() {
        let store = seeded();
        let hits = exact(store.connection(), "ВЕЦЕР", Direction::BelRus).unwrap();
        assert_eq!(hits.iter().map(|h| h.entry_id).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn mask_groups_variant_spellings() {
        let store = seeded();
        // "веска" and "вёска" share the mask "вёска"
        let hits = by_mask(store.connection(), "веска", Some(Direction::BelRus), 10).unwrap();
        assert_eq!(words(&hits), ["Вёска"]);

        let yo = by_mask(store.connection(), "Ёлка", Some(Direction::BelRus), 10).unwrap();
        assert_eq!(words(&yo), ["елка"]);

        let global = by_mask(store.connection(), "ветер", None, 10).unwrap();
        assert_eq!(global.len(), 1);
        assert_eq!(global[0].direction, Direction::RusBel);

        assert!(by_mask(store.connection(), "ветер", Some(Direction::BelDef), 10).unwrap().is_empty());
    }
}
