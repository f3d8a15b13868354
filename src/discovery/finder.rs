use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::core::constants::patterns;
use crate::core::types::Row;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(patterns::URL).expect("Failed to compile URL regex pattern"));

/// Find every non-overlapping URL match in `text`, left to right.
pub fn extract_urls(text: &str) -> impl Iterator<Item = &str> {
    URL_REGEX.find_iter(text).map(|m| m.as_str())
}

pub trait UrlFinder {
    /// URLs in `row` that this finder has not yielded before, in column order.
    fn find_new_urls(&mut self, row: &Row) -> Vec<String>;
}

/// URL finder that owns the seen-set for a single run.
#[derive(Default, Debug)]
pub struct Finder {
    seen: FxHashSet<String>,
}

impl UrlFinder for Finder {
    fn find_new_urls(&mut self, row: &Row) -> Vec<String> {
        let mut new_urls = Vec::new();

        for (column, value) in row.iter().filter(|(_, value)| !value.is_empty()) {
            for url in extract_urls(value) {
                if self.seen.insert(url.to_string()) {
                    debug!("New URL in column '{column}': {url}");
                    new_urls.push(url.to_string());
                }
            }
        }

        new_urls
    }
}

impl Finder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct URLs yielded so far.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn has_seen(&self, url: &str) -> bool {
        self.seen.contains(url)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn row(cells: &[(&str, &str)]) -> Row {
        Row::from_cells(
            cells.iter().map(|(name, _)| *name),
            cells.iter().map(|(_, value)| *value),
        )
    }

    #[test]
    fn test_extract_urls__multiple_urls_same_cell() {
        let text = "see http://x.test/a.pdf, also https://y.test/b.pdf";
        let urls: Vec<&str> = extract_urls(text).collect();

        assert_eq!(urls, vec!["http://x.test/a.pdf", "https://y.test/b.pdf"]);
    }

    #[test]
    fn test_extract_urls__stops_at_quote_comma_and_whitespace() {
        let urls: Vec<&str> =
            extract_urls("a \"http://q.test/x\" http://c.test/y,z http://w.test/p\ttab").collect();

        assert_eq!(
            urls,
            vec!["http://q.test/x", "http://c.test/y", "http://w.test/p"]
        );
    }

    #[test]
    fn test_extract_urls__keeps_query_fragment_and_parens() {
        let urls: Vec<&str> =
            extract_urls("(https://example.com/report.FINAL(v2).csv?x=1#top)").collect();

        assert_eq!(urls, vec!["https://example.com/report.FINAL(v2).csv?x=1#top)"]);
    }

    #[test]
    fn test_extract_urls__ignores_other_schemes() {
        let urls: Vec<&str> =
            extract_urls("ftp://files.test/a mailto:x@y.test httpx://nope.test").collect();

        assert!(urls.is_empty());
    }

    #[test]
    fn test_extract_urls__bare_scheme_needs_one_char() {
        assert_eq!(extract_urls("http://").count(), 0);
        assert_eq!(extract_urls("http://a").collect::<Vec<_>>(), vec!["http://a"]);
    }

    #[test]
    fn test_extract_urls__unicode_whitespace_terminates() {
        let urls: Vec<&str> = extract_urls("http://x.test/a\u{00a0}next").collect();
        assert_eq!(urls, vec!["http://x.test/a"]);
    }

    #[test]
    fn test_extract_urls__separator_controls_terminate() {
        for sep in ['\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}'] {
            let text = format!("http://a.test/x{sep}y");
            let urls: Vec<&str> = extract_urls(&text).collect();
            assert_eq!(urls, vec!["http://a.test/x"]);
        }
    }

    #[test]
    fn test_find_new_urls__separator_control_splits_seen_key() {
        let mut finder = Finder::new();
        let r = row(&[("a", "http://a.test/x\u{1c}y"), ("b", "http://a.test/x")]);

        assert_eq!(finder.find_new_urls(&r), vec!["http://a.test/x"]);
    }

    #[test]
    fn test_extract_urls__scheme_is_case_sensitive() {
        assert_eq!(extract_urls("HTTP://x.test/a").count(), 0);
    }

    #[test]
    fn test_find_new_urls__dedup_within_cell() {
        let mut finder = Finder::new();
        let r = row(&[
            ("name", "foo"),
            ("link", "see http://x.test/a.pdf, also http://x.test/a.pdf"),
        ]);

        assert_eq!(finder.find_new_urls(&r), vec!["http://x.test/a.pdf"]);
        assert_eq!(finder.seen_count(), 1);
    }

    #[test]
    fn test_find_new_urls__dedup_across_rows() {
        let mut finder = Finder::new();
        let first = row(&[("a", "http://x.test/1"), ("b", "http://x.test/2")]);
        let second = row(&[("a", "http://x.test/2"), ("b", "http://x.test/3")]);

        assert_eq!(
            finder.find_new_urls(&first),
            vec!["http://x.test/1", "http://x.test/2"]
        );
        assert_eq!(finder.find_new_urls(&second), vec!["http://x.test/3"]);
        assert!(finder.has_seen("http://x.test/2"));
        assert!(!finder.has_seen("http://x.test/4"));
    }

    #[test]
    fn test_find_new_urls__column_order() {
        let mut finder = Finder::new();
        let r = row(&[("z", "http://x.test/z"), ("a", "http://x.test/a")]);

        assert_eq!(
            finder.find_new_urls(&r),
            vec!["http://x.test/z", "http://x.test/a"]
        );
    }

    #[test]
    fn test_find_new_urls__row_without_urls() {
        let mut finder = Finder::new();
        let r = row(&[("name", "plain text"), ("empty", ""), ("x", "www.example.com")]);

        assert!(finder.find_new_urls(&r).is_empty());
        assert_eq!(finder.seen_count(), 0);
    }

    #[test]
    fn test_find_new_urls__no_normalization() {
        let mut finder = Finder::new();
        let r = row(&[
            ("a", "http://x.test/a"),
            ("b", "http://x.test/a/"),
            ("c", "https://x.test/a"),
        ]);

        assert_eq!(finder.find_new_urls(&r).len(), 3);
    }

    #[test]
    fn test_finders_do_not_share_state() {
        let r = row(&[("link", "http://x.test/a")]);

        let mut first = Finder::new();
        let mut second = Finder::new();

        assert_eq!(first.find_new_urls(&r).len(), 1);
        assert_eq!(second.find_new_urls(&r).len(), 1);
    }
}
