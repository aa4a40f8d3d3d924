//! Link extraction from index and player pages
//!
//! The archive's markup is table soup with no usable classes or ids, so
//! links are recognized purely by the query shape of their targets (see
//! [`crate::url`]). Letter pages list players; player pages list interviews
//! with the interview date in a `<nobr>` fragment elsewhere in the same
//! table row.

use crate::url::{is_interview_link, is_player_link, resolve};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("a[href] selector"));
static NOBR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("nobr").expect("nobr selector"));
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("h1 selector"));

/// A player detail link from a letter index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLink {
    pub url: url::Url,
    pub name: String,
}

/// An interview link from a player page, with the row's inline date when the
/// page provides one (brackets already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewLink {
    pub url: url::Url,
    pub title: String,
    pub date: String,
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Player links from a letter page, in document order, deduplicated by
/// resolved URL (first occurrence keeps its label). Anchors with empty text
/// are dropped and do not claim their URL.
pub fn player_links(doc: &Html, base: &url::Url) -> Vec<PlayerLink> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for anchor in doc.select(&ANCHOR) {
        let href = anchor.value().attr("href").unwrap_or("");
        if !is_player_link(href) {
            continue;
        }
        let Some(url) = resolve(base, href) else {
            continue;
        };
        let name = element_text(anchor);
        if name.is_empty() || seen.contains(url.as_str()) {
            continue;
        }
        seen.insert(url.to_string());
        out.push(PlayerLink { url, name });
    }

    out
}

/// Interview links from a player page, in document order. Not deduplicated
/// here: the crawl loop dedups at the interview-id level, and a repeated
/// listing is harmless once the first append marks the id known.
pub fn interview_links(doc: &Html, base: &url::Url) -> Vec<InterviewLink> {
    let mut out = Vec::new();

    for anchor in doc.select(&ANCHOR) {
        let href = anchor.value().attr("href").unwrap_or("");
        if !is_interview_link(href) {
            continue;
        }
        let Some(url) = resolve(base, href) else {
            continue;
        };
        let title = element_text(anchor);
        if title.is_empty() {
            continue;
        }
        let date = row_inline_date(anchor);
        out.push(InterviewLink { url, title, date });
    }

    out
}

/// The page's `<h1>` text, used for the player-name override (the player
/// page heading is more reliable than the letter-page anchor label).
pub fn page_heading(doc: &Html) -> Option<String> {
    doc.select(&H1)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Looks for a `[bracketed]` date in the anchor's enclosing table row.
fn row_inline_date(anchor: ElementRef<'_>) -> String {
    let row = anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "tr");

    let Some(row) = row else {
        return String::new();
    };

    match row.select(&NOBR).next() {
        Some(nobr) => strip_brackets(&element_text(nobr)).to_string(),
        None => String::new(),
    }
}

fn strip_brackets(text: &str) -> &str {
    let text = text.strip_prefix('[').unwrap_or(text);
    text.strip_suffix(']').unwrap_or(text)
}
