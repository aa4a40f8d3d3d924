//! Transcript body extraction
//!
//! The transcript lives in the same `<td>` as the page's `<h1>`; navigation
//! and sidebar content sit in sibling cells. Extraction is two-tier because
//! the corpus markup is inconsistent: most pages wrap the transcript in
//! `<p>` tags, some older ones don't, and a few lack the main cell entirely.
//! Every tier truncates at the first boilerplate marker (the transcript
//! service credit or the copyright line) and discards everything after it.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").expect("h1 selector"));
static P: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").expect("p selector"));
static MAIN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main").expect("main selector"));
static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector"));
static WITH_ID: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id]").expect("[id] selector"));

/// Markers that begin the boilerplate trailer inside transcript paragraphs.
const PARAGRAPH_MARKERS: [&str; 2] = ["FastScripts Transcript", "ASAP Sports, Inc"];

/// Markers used when truncating flattened page text.
const FLATTENED_MARKERS: [&str; 3] = [
    "FastScripts Transcript",
    "ASAP Sports, Inc.",
    "Subscribe to RSS",
];

/// Ids that signal the main content region in the whole-document fallback.
const MAIN_REGION_IDS: [&str; 3] = ["content", "main", "transcript"];

/// Extracts the transcript text from an interview page. Total: returns an
/// empty string when nothing recognizable is present.
pub fn transcript_text(doc: &Html) -> String {
    let main_cell = doc
        .select(&H1)
        .next()
        .and_then(|h1| nearest_ancestor(h1, "td"));

    let mut parts: Vec<String> = Vec::new();
    if let Some(cell) = main_cell {
        for paragraph in cell.select(&P) {
            let text = element_text(paragraph);
            if PARAGRAPH_MARKERS.iter().any(|m| text.contains(m)) {
                break;
            }
            if !text.is_empty() {
                parts.push(text);
            }
        }

        // Paragraph-free markup: flatten the whole cell instead.
        if parts.is_empty() {
            let text = truncate_at_markers(flattened_text(cell), &FLATTENED_MARKERS);
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }

    if parts.is_empty() {
        fallback_text(doc)
    } else {
        parts.join("\n\n")
    }
}

/// Coarse fallback for pages without a usable main cell: skip script/style/
/// navigation subtrees, pick a main region by id heuristic, flatten its text.
fn fallback_text(doc: &Html) -> String {
    let region = find_main_region(doc);
    let text = match region {
        Some(el) => collect_visible_text(el),
        None => collect_visible_text_from_root(doc),
    };
    truncate_at_markers(text, &FLATTENED_MARKERS)
}

/// Locates the main content region: an element whose id mentions
/// content/main/transcript, else `<main>`, else `<body>`.
fn find_main_region(doc: &Html) -> Option<ElementRef<'_>> {
    let by_id = doc.select(&WITH_ID).find(|el| {
        el.value()
            .attr("id")
            .map(|id| {
                let id = id.to_lowercase();
                MAIN_REGION_IDS.iter().any(|needle| id.contains(needle))
            })
            .unwrap_or(false)
    });

    by_id
        .or_else(|| doc.select(&MAIN).next())
        .or_else(|| doc.select(&BODY).next())
}

/// Walks up the tree to the closest ancestor element with the given name.
fn nearest_ancestor<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == name)
}

/// Concatenated text of an element, whitespace-trimmed. Inline children run
/// together, matching how the site nests bold speaker labels inside
/// paragraphs.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Element text with a newline between chunks, trimming each and dropping
/// blanks. The coarse equivalent of paragraph collection.
fn flattened_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Like [`flattened_text`] but skips script, style, and navigation subtrees.
fn collect_visible_text(el: ElementRef<'_>) -> String {
    let mut chunks = Vec::new();
    collect_text_nodes(*el, &mut chunks);
    chunks.join("\n")
}

fn collect_visible_text_from_root(doc: &Html) -> String {
    collect_visible_text(doc.root_element())
}

fn collect_text_nodes(node: NodeRef<'_, Node>, out: &mut Vec<String>) {
    if let Node::Element(el) = node.value() {
        if matches!(el.name(), "script" | "style" | "nav") {
            return;
        }
    }
    if let Node::Text(text) = node.value() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
        return;
    }
    for child in node.children() {
        collect_text_nodes(child, out);
    }
}

/// Cuts the text at the earliest occurrence of any marker.
fn truncate_at_markers(mut text: String, markers: &[&str]) -> String {
    for marker in markers {
        if let Some(pos) = text.find(marker) {
            text.truncate(pos);
        }
    }
    text.trim().to_string()
}
