// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod search;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{DataSet, Direction, DirectionLinks, EntryId, Vocabulary, VocabularyRow};
pub use error::{Error, Result};
