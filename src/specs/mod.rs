// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific readers** for skarnik.by.
//! Each spec focuses on a single kind of page and encodes *where the ground truth
//! lives in the HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML reading**: a spec is fed the events of one page
//!   (`core::html::feed`) and returns its result by value from `finish()`.
//! - **Small explicit state machines** instead of parser side effects, so rules like
//!   “first text inside an anchor wins” are visible and testable.
//!
//! ## What does **not** live here
//! - **Networking**: pages arrive as `&str`; fetching is `scrape`'s job.
//! - **Cross-page merging**: `scrape::merge_pages` folds per-page results.
//! - **Normalization / persistence**: `core::normalize` and `store`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_all → specs::landing::parse   (site root)
//!                              → specs::letter::parse    (each letter page)
//!        → store::Store::insert_all
//! ```
//!
//! ## Current specs
//! - `landing` – letter-page URLs per dictionary direction, in page order.
//! - `letter` – `word -> entry id` for one letter page.
pub mod landing;
pub mod letter;
