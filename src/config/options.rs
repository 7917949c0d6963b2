// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub net: NetOptions,
    pub build: BuildOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    /// Upper bound for one request, connect through last body byte.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    base_url: String,
    pub database: PathBuf,
    /// Recreate the target database before crawling instead of building
    /// into a staging file and swapping it in at the end.
    pub in_place: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            database: PathBuf::from(DATABASE_FILE),
            in_place: false,
        }
    }
}

impl BuildOptions {
    /// Site root, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, url: &str) {
        let url = url.trim();
        self.base_url = if url.ends_with('/') { s!(url) } else { join!(url, "/") };
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.set_base_url(url);
        self
    }

    /// Where a staged build is written before it replaces `database`.
    pub fn staging_path(&self) -> PathBuf {
        staging_path_for(&self.database)
    }
}

fn staging_path_for(db: &Path) -> PathBuf {
    let mut name = db.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(STAGING_SUFFIX);
    db.with_file_name(name)
}
