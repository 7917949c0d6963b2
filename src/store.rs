// src/store.rs
//
// The `vocabulary` table. A build always starts from an empty file: the old
// one is removed, the schema and indexes are created, and every row goes in
// under one transaction.

use std::fs;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::normalize;
use crate::data::{DataSet, Direction, VocabularyRow};
use crate::error::Result;

/// Table and index definitions. `(word_id, lang_id)` is unique; the other
/// indexes serve per-direction autocomplete and global mask/lowercase lookups.
pub const SCHEMA: [&str; 8] = [
    "CREATE TABLE vocabulary(id INTEGER PRIMARY KEY, word_id INTEGER, word TEXT, lword TEXT, lang_id INTEGER, first_char VARCHAR(1), word_mask TEXT);",
    "CREATE UNIQUE INDEX wordid_langid_unique ON vocabulary (word_id, lang_id);",
    "CREATE INDEX firstchar_lang_index ON vocabulary (first_char, lang_id);",
    "CREATE INDEX lword_lang_index ON vocabulary (lword, lang_id);",
    "CREATE INDEX wordmask_firstchar_lang_index ON vocabulary (word_mask, first_char, lang_id);",
    "CREATE INDEX lword_firstchar_lang_index ON vocabulary (lword, first_char, lang_id);",
    "CREATE INDEX wordmask_index ON vocabulary (word_mask);",
    "CREATE INDEX lword_index ON vocabulary (lword);",
];

const INSERT_ROW: &str = "INSERT OR IGNORE INTO vocabulary (word, word_id, lword, word_mask, lang_id, first_char) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6);";

/// Outcome of one insertion batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertSummary {
    pub inserted: usize,
    /// Rows dropped by the `(word_id, lang_id)` uniqueness rule.
    pub ignored: usize,
}

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Delete whatever is at `path` and create a fresh, empty schema there.
    pub fn recreate(path: &Path) -> Result<Self> {
        logf!("Recreate database: {}", path.display());
        if path.exists() {
            fs::remove_file(path)?;
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let store = Self { conn: Connection::open(path)? };
        store.create_schema()?;
        Ok(store)
    }

    /// Empty schema in memory (tests, dry runs).
    pub fn in_memory() -> Result<Self> {
        let store = Self { conn: Connection::open_in_memory()? };
        store.create_schema()?;
        Ok(store)
    }

    /// Open an existing database as-is.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self { conn: Connection::open(path)? })
    }

    fn create_schema(&self) -> Result<()> {
        for stmt in SCHEMA {
            self.conn.execute_batch(stmt)?;
        }
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert every row of a crawl in one transaction.
    pub fn insert_all(&mut self, data: &DataSet) -> Result<InsertSummary> {
        logf!("Adding words into database...");
        let summary = self.insert_rows(data.rows())?;
        logf!("{} rows inserted, {} duplicates ignored", summary.inserted, summary.ignored);
        Ok(summary)
    }

    /// Insert rows in one transaction. Duplicate `(entry_id, direction)` pairs
    /// are skipped, first one in wins. Nothing is committed on error.
    pub fn insert_rows<I>(&mut self, rows: I) -> Result<InsertSummary>
    where
        I: IntoIterator<Item = VocabularyRow>,
    {
        let tx = self.conn.transaction()?;
        let mut summary = InsertSummary::default();
        {
            let mut stmt = tx.prepare_cached(INSERT_ROW)?;
            for row in rows {
                let changed = stmt.execute(params![
                    row.word,
                    row.entry_id,
                    row.lword,
                    row.word_mask,
                    row.direction.code(),
                    row.first_char,
                ])?;
                if changed == 0 {
                    summary.ignored += 1;
                } else {
                    summary.inserted += 1;
                }
            }
        }
        tx.commit()?;
        Ok(summary)
    }

    /// Recompute `first_char` and `word_mask` of every row from its `word`.
    /// Needed after the mask table changes; returns the number of rows touched.
    pub fn reindex(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let rows: Vec<(i64, String)> = {
            let mut stmt = tx.prepare("SELECT id, word FROM vocabulary")?;
            let mapped = stmt.query_map([], |r| Ok((r.get(0)?, r.get(1)?)))?;
            mapped.collect::<rusqlite::Result<_>>()?
        };

        let mut touched = 0;
        {
            let mut stmt = tx.prepare_cached(
                "UPDATE vocabulary SET first_char = ?1, word_mask = ?2 WHERE id = ?3",
            )?;
            for (id, word) in &rows {
                let first = normalize::first_char(word).map(|c| c.to_string());
                touched += stmt.execute(params![first, normalize::word_mask(word), id])?;
            }
        }
        tx.commit()?;
        logf!("Reindexed {touched} rows");
        Ok(touched)
    }

    /// Row count, overall or for one direction.
    pub fn count(&self, direction: Option<Direction>) -> Result<usize> {
        let n: i64 = match direction {
            Some(d) => self.conn.query_row(
                "SELECT COUNT(*) FROM vocabulary WHERE lang_id = ?1",
                [d.code()],
                |r| r.get(0),
            )?,
            None => self.conn.query_row("SELECT COUNT(*) FROM vocabulary", [], |r| r.get(0))?,
        };
        Ok(n as usize)
    }

    /// Row stored for a site entry in one direction, if any.
    pub fn get(&self, entry_id: i64, direction: Direction) -> Result<Option<VocabularyRow>> {
        let row = self
            .conn
            .query_row(
                "SELECT word, word_id, lword, first_char, word_mask FROM vocabulary \
                 WHERE word_id = ?1 AND lang_id = ?2",
                params![entry_id, direction.code()],
                |r| {
                    Ok(VocabularyRow {
                        word: r.get(0)?,
                        entry_id: r.get(1)?,
                        direction,
                        lword: r.get(2)?,
                        first_char: r.get(3)?,
                        word_mask: r.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Flush and close; surfaces errors that `Drop` would swallow.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
