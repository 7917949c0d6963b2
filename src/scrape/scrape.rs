// src/scrape/scrape.rs
//
// Fetch-and-merge. Pages are fetched one at a time in landing-page order;
// the first failure aborts the whole direction, and any direction failing
// aborts the crawl. No partial vocabulary ever leaves this module.

use crate::{
    core::net::{self, Fetch},
    data::{DataSet, Direction, DirectionLinks, Vocabulary},
    error::Result,
    progress::Progress,
    specs,
};

/// Fold per-page vocabularies left to right. For a word seen on several
/// pages the latest page's id wins; the word keeps its first-seen position.
pub fn merge_pages<I>(pages: I) -> Vocabulary
where
    I: IntoIterator<Item = Vocabulary>,
{
    pages.into_iter().fold(Vocabulary::new(), |mut acc, page| {
        for (word, id) in page {
            acc.insert(word, id);
        }
        acc
    })
}

/// Fetch the landing page and classify its letter links.
pub fn discover_links<F: Fetch + ?Sized>(fetcher: &F, base_url: &str) -> Result<DirectionLinks> {
    let doc = net::get_page(fetcher, base_url)?;
    let links = specs::landing::parse(&doc, base_url);
    for d in Direction::ALL {
        logf!("{d}: {} letter pages", links.get(d).len());
    }
    Ok(links)
}

/// Fetch every page of one direction and merge the results.
pub fn collect_direction<F: Fetch + ?Sized>(
    fetcher: &F,
    direction: Direction,
    urls: &[String],
    progress: &mut dyn Progress,
) -> Result<Vocabulary> {
    progress.begin(direction, urls.len());

    let mut pages = Vec::with_capacity(urls.len());
    for url in urls {
        let doc = match net::get_page(fetcher, url) {
            Ok(doc) => doc,
            Err(e) => {
                progress.page_failed(url);
                progress.finish(direction);
                return Err(e.in_direction(direction));
            }
        };
        let words = specs::letter::parse(&doc);
        progress.page_done(url, words.len());
        pages.push(words);
    }

    let vocab = merge_pages(pages);
    progress.finish(direction);
    logf!("{direction}: {} words", vocab.len());
    Ok(vocab)
}

/// The whole crawl: landing page, then each direction in `Direction::ALL` order.
pub fn collect_all<F: Fetch + ?Sized>(
    fetcher: &F,
    base_url: &str,
    progress: &mut dyn Progress,
) -> Result<DataSet> {
    progress.log("Reading landing page…");
    let links = discover_links(fetcher, base_url)?;

    let mut vocabularies = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let vocab = collect_direction(fetcher, direction, links.get(direction), progress)?;
        vocabularies.push((direction, vocab));
    }
    Ok(DataSet { vocabularies })
}
