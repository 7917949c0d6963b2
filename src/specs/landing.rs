// src/specs/landing.rs
//! Scraping *spec* for the landing page.
//!
//! Purpose:
//! - Read the site root and sort its letter links into the three dictionaries:
//!   `BASE/bukva/…` (rus→bel), `BASE/litara/…` (bel→rus), `BASE/litara-tsbm/…` (bel definitions).
//! - Keep the links in page order; that order is the fetch order later on.
//!
//! Links that match none of the prefixes (navigation, relative links, other hosts) are ignored.
//! The prefixes don't overlap today; should they ever, the first one in `Direction::ALL` wins.

use crate::core::html::{self, HtmlSink};
use crate::data::{Direction, DirectionLinks};

/// Collects classified `<a href>` targets while fed one page.
pub struct LandingParser {
    prefixes: [(Direction, String); 3],
    links: DirectionLinks,
}

impl LandingParser {
    pub fn new(base_url: &str) -> Self {
        Self {
            prefixes: Direction::ALL.map(|d| (d, join!(base_url, d.path_prefix()))),
            links: DirectionLinks::default(),
        }
    }

    pub fn classify(&self, href: &str) -> Option<Direction> {
        self.prefixes
            .iter()
            .find(|(_, prefix)| href.starts_with(prefix.as_str()))
            .map(|&(d, _)| d)
    }

    pub fn finish(self) -> DirectionLinks {
        self.links
    }
}

impl HtmlSink for LandingParser {
    fn start_tag(&mut self, name: &str, attrs: &[(&str, &str)]) {
        if name != "a" {
            return;
        }
        let Some(href) = html::attr(attrs, "href") else { return };
        if let Some(direction) = self.classify(href) {
            self.links.push(direction, s!(href));
        }
    }
}

/// Letter-page links of the landing page at `base_url`.
pub fn parse(doc: &str, base_url: &str) -> DirectionLinks {
    let mut parser = LandingParser::new(base_url);
    html::feed(doc, &mut parser);
    parser.finish()
}
