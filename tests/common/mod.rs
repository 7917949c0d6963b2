// tests/common/mod.rs
//
// In-memory site for driving the crawl offline.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use skarnik_scrape::core::net::{Fetch, Response};
use skarnik_scrape::Result;

pub const BASE: &str = "http://skarnik.test/";

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Response>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Response::ok(body));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Response { status, body: Vec::new() });
        self
    }
}

impl Fetch for FakeSite {
    fn fetch(&self, url: &str) -> Result<Response> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(self
            .pages
            .get(url)
            .cloned()
            .unwrap_or(Response { status: 404, body: Vec::new() }))
    }
}

pub fn anchor(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}">{text}</a>"#)
}

/// A letter page listing `(word, id)` pairs under `detail` (e.g. "rusbel").
pub fn letter_page(detail: &str, entries: &[(&str, i64)]) -> String {
    let items: String = entries
        .iter()
        .map(|(w, id)| format!("<li>{}</li>\n", anchor(&format!("{BASE}{detail}/{id}"), w)))
        .collect();
    format!("<html><body><ul>\n{items}</ul></body></html>")
}

/// Landing page linking the given letter-page URLs, plus some noise links.
pub fn landing_page(links: &[&str]) -> String {
    let mut body = String::from(r#"<a href="/about">About</a><a href="https://other.site/bukva/x">x</a>"#);
    for l in links {
        body.push_str(&anchor(l, "Л"));
    }
    format!("<html><body><nav>{body}</nav></body></html>")
}
