// src/specs/letter.rs
//! Scraping *spec* for one letter page.
//!
//! A letter page lists every entry starting with one letter as
//! `<a href="…/rusbel/12345">слова</a>`. We keep `word -> 12345`.
//!
//! Rules:
//! - The id is the run of digits after the last `/` of the href, and must end the href.
//! - The word is the first non-blank text inside the anchor, trimmed. Later text
//!   in the same anchor (`<a …>слова <i>ж.</i></a>`) is not appended.
//! - Anchors with no href, no trailing id, or no text give nothing. Not an error.
//! - The same word twice on a page: the later anchor's id wins.

use crate::core::html::{self, HtmlSink};
use crate::data::{EntryId, Vocabulary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AnchorState {
    /// Not inside an anchor, or inside one that already gave its word.
    Outside,
    /// Inside an anchor; `Some` when its href carried an id.
    Inside(Option<EntryId>),
}

pub struct LetterPageParser {
    state: AnchorState,
    words: Vocabulary,
}

impl Default for LetterPageParser {
    fn default() -> Self {
        Self { state: AnchorState::Outside, words: Vocabulary::new() }
    }
}

impl LetterPageParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Vocabulary {
        self.words
    }
}

impl HtmlSink for LetterPageParser {
    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        if name == "a" {
            let id = html::attr(attrs, "href").and_then(entry_id_from_href);
            self.state = AnchorState::Inside(id);
        }
    }

    fn end_tag(&mut self, name: &str) {
        if name == "a" {
            self.state = AnchorState::Outside;
        }
    }

    fn text(&mut self, data: &str) {
        let AnchorState::Inside(Some(id)) = self.state else { return };
        let word = data.trim();
        if word.is_empty() {
            return;
        }
        self.words.insert(s!(word), id);
        self.state = AnchorState::Outside;
    }
}

/// Trailing `/<digits>` of an href, e.g. `http://…/belrus/1234` → 1234.
pub fn entry_id_from_href(href: &str) -> Option<EntryId> {
    let (_, tail) = href.rsplit_once('/')?;
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}

/// `word -> entry id` for one letter page.
pub fn parse(doc: &str) -> Vocabulary {
    let mut parser = LetterPageParser::new();
    html::feed(doc, &mut parser);
    parser.finish()
}
