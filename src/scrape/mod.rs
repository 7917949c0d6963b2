// src/scrape/mod.rs
mod scrape;

pub use scrape::merge_pages;
pub use scrape::discover_links;
pub use scrape::collect_direction;
pub use scrape::collect_all;
