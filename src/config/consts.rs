// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://www.skarnik.by/";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("skarnik_scrape/", env!("CARGO_PKG_VERSION"));

// Store
pub const DATABASE_FILE: &str = "vocabulary.db";
pub const STAGING_SUFFIX: &str = "partial"; // vocabulary.db -> vocabulary.db.partial
