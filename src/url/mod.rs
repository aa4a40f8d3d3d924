//! URL shapes for the ASAP Sports archive
//!
//! The site's markup carries no semantic structure, so link discovery is
//! driven entirely by URL query shape: player pages are
//! `show_player.php?id=...` and interview pages are
//! `show_interview.php?id=...`. Everything here is pure string/URL work with
//! no network access.

use url::Url;

/// Fixed top-level fan-out: one index page per letter.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Derives the site base (scheme + host) and category id from a landing URL
/// like `https://www.asapsports.com/showcat.php?id=2`.
///
/// A landing URL without an `id` parameter falls back to category "2"
/// (baseball), matching the archive's default.
pub fn base_and_category(landing: &Url) -> (String, String) {
    let base = landing.origin().ascii_serialization();
    let category = landing
        .query_pairs()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .unwrap_or_else(|| "2".to_string());
    (base, category)
}

/// Builds the letter index URLs (a–z), optionally truncated for bounded runs.
pub fn letter_index_urls(base: &str, category: &str, max_letters: Option<usize>) -> Vec<Url> {
    LETTERS
        .chars()
        .take(max_letters.unwrap_or(usize::MAX))
        .filter_map(|letter| {
            Url::parse(&format!(
                "{}/show_player.php?category={}&letter={}",
                base, category, letter
            ))
            .ok()
        })
        .collect()
}

/// True for hrefs pointing at a player detail page.
///
/// Anchors carrying a `letter=` parameter are the index's own A–Z navigation,
/// not players, and are excluded.
pub fn is_player_link(href: &str) -> bool {
    href.contains("show_player.php?id=") && !href.contains("letter=")
}

/// True for hrefs pointing at an interview detail page.
pub fn is_interview_link(href: &str) -> bool {
    href.contains("show_interview.php?id=")
}

/// Extracts the interview id from a `show_interview.php?id=...` URL.
///
/// Returns None when the URL carries no non-empty `id` pair; such links are
/// skipped by the crawl (they cannot participate in resume tracking).
pub fn interview_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .filter(|id| !id.is_empty())
}

/// Resolves an href against a base URL, keeping only http(s) results.
pub fn resolve(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    match base.join(href) {
        Ok(absolute) => {
            if absolute.scheme() == "http" || absolute.scheme() == "https" {
                Some(absolute)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.asapsports.com/").unwrap()
    }

    #[test]
    fn test_base_and_category_from_landing() {
        let landing = Url::parse("https://www.asapsports.com/showcat.php?id=2").unwrap();
        let (base, category) = base_and_category(&landing);
        assert_eq!(base, "https://www.asapsports.com");
        assert_eq!(category, "2");
    }

    #[test]
    fn test_base_and_category_default() {
        let landing = Url::parse("https://www.asapsports.com/showcat.php").unwrap();
        let (_, category) = base_and_category(&landing);
        assert_eq!(category, "2");
    }

    #[test]
    fn test_letter_index_urls_full_fanout() {
        let urls = letter_index_urls("https://www.asapsports.com", "2", None);
        assert_eq!(urls.len(), 26);
        assert_eq!(
            urls[0].as_str(),
            "https://www.asapsports.com/show_player.php?category=2&letter=a"
        );
        assert_eq!(
            urls[25].as_str(),
            "https://www.asapsports.com/show_player.php?category=2&letter=z"
        );
    }

    #[test]
    fn test_letter_index_urls_truncated() {
        let urls = letter_index_urls("https://www.asapsports.com", "2", Some(3));
        assert_eq!(urls.len(), 3);
        assert!(urls[2].as_str().ends_with("letter=c"));
    }

    #[test]
    fn test_player_link_shape() {
        assert!(is_player_link("/show_player.php?id=123"));
        assert!(!is_player_link("/show_player.php?category=2&letter=a&id=1"));
        assert!(!is_player_link("/show_interview.php?id=123"));
    }

    #[test]
    fn test_interview_link_shape() {
        assert!(is_interview_link("/show_interview.php?id=99"));
        assert!(!is_interview_link("/show_player.php?id=99"));
    }

    #[test]
    fn test_interview_id_present() {
        let url = Url::parse("https://www.asapsports.com/show_interview.php?id=X123").unwrap();
        assert_eq!(interview_id(&url), Some("X123".to_string()));
    }

    #[test]
    fn test_interview_id_missing() {
        let url = Url::parse("https://www.asapsports.com/show_interview.php").unwrap();
        assert_eq!(interview_id(&url), None);

        let url = Url::parse("https://www.asapsports.com/show_interview.php?id=").unwrap();
        assert_eq!(interview_id(&url), None);
    }

    #[test]
    fn test_resolve_relative() {
        let resolved = resolve(&base(), "show_interview.php?id=5").unwrap();
        assert_eq!(
            resolved.as_str(),
            "https://www.asapsports.com/show_interview.php?id=5"
        );
    }

    #[test]
    fn test_resolve_rejects_non_http() {
        assert!(resolve(&base(), "javascript:void(0)").is_none());
        assert!(resolve(&base(), "mailto:x@example.com").is_none());
        assert!(resolve(&base(), "").is_none());
    }
}
