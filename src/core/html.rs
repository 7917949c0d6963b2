// src/core/html.rs
// Event-style view of an HTML page.
//
// `scraper` builds a tolerant tree (html5ever), which we replay in document
// order as three events: start tag, text, end tag. Page readers in `specs`
// only ever see those events, so they stay small state machines.
// Tag names arrive lowercased.

use ego_tree::iter::Edge;
use scraper::{Html, Node};

/// Receives the events of one page. Implementors own their accumulator and
/// hand it back from their own `finish`.
pub trait HtmlSink {
    fn start_tag(&mut self, _name: &str, _attrs: &[(&str, &str)]) {}
    fn end_tag(&mut self, _name: &str) {}
    fn text(&mut self, _data: &str) {}
}

/// Parse `doc` and replay it into `sink`. The walk is iterative, so nesting
/// depth is bounded by memory rather than by the call stack.
pub fn feed<S: HtmlSink + ?Sized>(doc: &str, sink: &mut S) {
    let html = Html::parse_document(doc);
    for edge in html.root_element().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) => {
                    let attrs: Vec<(&str, &str)> = el.attrs().collect();
                    sink.start_tag(el.name(), &attrs);
                }
                Node::Text(text) => sink.text(text),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    sink.end_tag(el.name());
                }
            }
        }
    }
}

/// Value of attribute `name` (ASCII case-insensitive).
pub fn attr<'a>(attrs: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|&(_, v)| v)
}
