// src/runner.rs
use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::{
    config::options::BuildOptions,
    core::net::Fetch,
    data::{DataSet, Direction},
    error::Result,
    progress::Progress,
    scrape,
    store::{InsertSummary, Store},
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub database: PathBuf,
    pub words: Vec<(Direction, usize)>,
    pub rows: InsertSummary,
}

/// Top-level build: crawl every direction, then write the database.
///
/// Staged (default): nothing on disk is touched until the crawl has fully
/// succeeded. Rows go into `<db>.partial`, which is renamed over `<db>` at
/// the end, so a failed run keeps the previous dataset. A failed write
/// removes the staging file.
///
/// In place: `<db>` is recreated before the crawl starts. A failed crawl
/// then leaves an empty, schema-only database behind.
pub fn run_build<F: Fetch + ?Sized>(
    opts: &BuildOptions,
    fetcher: &F,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    if opts.in_place {
        let mut store = Store::recreate(&opts.database)?;
        let data = scrape::collect_all(fetcher, opts.base_url(), progress)?;
        let rows = store.insert_all(&data)?;
        store.close()?;
        return Ok(summary(opts.database.clone(), &data, rows));
    }

    let data = scrape::collect_all(fetcher, opts.base_url(), progress)?;

    let staging = opts.staging_path();
    let rows = match write_staged(&staging, &opts.database, &data) {
        Ok(rows) => rows,
        Err(e) => {
            discard_staging(&staging);
            return Err(e);
        }
    };
    logf!("Moved {} into place", opts.database.display());

    Ok(summary(opts.database.clone(), &data, rows))
}

fn write_staged(staging: &Path, database: &Path, data: &DataSet) -> Result<InsertSummary> {
    let mut store = Store::recreate(staging)?;
    let rows = store.insert_all(data)?;
    store.close()?;
    fs::rename(staging, database)?;
    Ok(rows)
}

/// Best effort: drop a half-written staging database and its rollback journal.
fn discard_staging(staging: &Path) {
    let mut journal = staging.as_os_str().to_owned();
    journal.push("-journal");
    for path in [staging.to_path_buf(), PathBuf::from(journal)] {
        match fs::remove_file(&path) {
            Ok(()) => logd!("Removed {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => logw!("Could not remove {}: {e}", path.display()),
        }
    }
}

/// Recompute `first_char` / `word_mask` in an existing database.
pub fn run_reindex(opts: &BuildOptions) -> Result<usize> {
    if !opts.database.exists() {
        let msg = format!("{} not found; run `build` first", opts.database.display());
        return Err(io::Error::new(io::ErrorKind::NotFound, msg).into());
    }
    let mut store = Store::open(&opts.database)?;
    let touched = store.reindex()?;
    store.close()?;
    Ok(touched)
}

fn summary(database: PathBuf, data: &DataSet, rows: InsertSummary) -> RunSummary {
    RunSummary {
        database,
        words: data.vocabularies.iter().map(|(d, v)| (*d, v.len())).collect(),
        rows,
    }
}
