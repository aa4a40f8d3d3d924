//! Record extraction from interview pages
//!
//! Extraction is best-effort by design: a partially captured transcript is
//! worth more than a rejected page, so `extract` is total and an unusable
//! document simply yields a record of empty fields. The crawl loop fills in
//! the identifier, the source URL, and the more reliable player-page
//! overrides afterwards.

mod body;
mod headings;

pub use body::transcript_text;
pub use headings::{classify, is_full_date, HeadingFields};

use crate::store::Record;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("h1 selector"));
static H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").expect("h2 selector"));
static H3: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").expect("h3 selector"));

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Extracts a record from an interview page. Never fails; unrecoverable
/// fields stay empty.
pub fn extract(doc: &Html) -> Record {
    let mut record = Record::default();

    // The page title doubles as the event name.
    if let Some(h1) = doc.select(&H1).next() {
        let title = element_text(h1);
        record.event = title.clone();
        record.interview_title = title;
    }

    // Date usually sits in the h2 ("October 4, 2023").
    if let Some(h2) = doc.select(&H2).next() {
        let text = element_text(h2);
        if is_full_date(&text) {
            record.date = text;
        }
    }

    // The h3 run carries name, venue, team, and session type in no fixed
    // order; the rule table sorts them out. An h3-level date only counts
    // when the h2 gave none.
    let h3_texts: Vec<String> = doc.select(&H3).map(element_text).collect();
    let fields = classify(&h3_texts);
    if record.date.is_empty() {
        record.date = fields.date;
    }
    record.player_name = fields.player_name;
    record.venue = fields.venue;
    record.team = fields.team;
    record.session_type = fields.session_type;

    record.transcript = transcript_text(doc);

    record
}
