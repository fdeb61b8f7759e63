use crate::filter;
use scraper::{Html, Selector};
use url::Url;

/// Parses an HTML body and extracts anchor targets as normalized URLs.
///
/// Links come back in document order; duplicates within a page are kept
/// (the scheduler deduplicates against its visited set). Hrefs that do not
/// resolve against the page URL are dropped. Malformed HTML degrades to an
/// empty list rather than an error.
pub fn extract_links(body: &str, page_url: &Url) -> Vec<Url> {
    let doc = Html::parse_document(body);

    let link_selector = Selector::parse("a[href]").unwrap();
    let links: Vec<Url> = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| filter::normalize(href, page_url))
        .collect();

    ::log::debug!("found {} links in {}", links.len(), page_url);

    links
}
