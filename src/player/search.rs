//! Title and tag search over playable videos

use crate::model::{Catalog, Video};
use std::fmt;

/// Matches for one search, sorted by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// What the user searched for, as typed
    pub term: String,

    pub videos: Vec<Video>,
}

impl SearchResults {
    fn collect<F>(catalog: &Catalog, term: &str, matches: F) -> Self
    where
        F: Fn(&Video) -> bool,
    {
        let mut videos: Vec<Video> = catalog.playable().filter(|v| matches(*v)).cloned().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        log::debug!("Search for {:?} matched {} video(s)", term, videos.len());
        Self {
            term: term.to_string(),
            videos,
        }
    }

    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn by_title(catalog: &Catalog, term: &str) -> Self {
        Self::collect(catalog, term, |v| v.title_contains(term))
    }

    /// Unflagged videos carrying `tag`, ignoring case
    pub fn by_tag(catalog: &Catalog, tag: &str) -> Self {
        Self::collect(catalog, tag, |v| v.has_tag(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Resolve a 1-based answer to a result. Anything that is not a
    /// plain run of digits in `1..=len` means no selection.
    pub fn select(&self, answer: &str) -> Option<&Video> {
        if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let n: usize = answer.parse().ok()?;
        n.checked_sub(1).and_then(|idx| self.videos.get(idx))
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.videos.is_empty() {
            return write!(f, "No search results for {}", self.term);
        }
        write!(f, "Here are the results for {}:", self.term)?;
        for (idx, video) in self.videos.iter().enumerate() {
            write!(f, "\n  {}) {}", idx + 1, video)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog: Catalog = vec![
            Video::new("funny_dogs", "Funny Dogs", vec!["dog".into(), "animal".into()]),
            Video::new("amazing_cats", "Amazing Cats", vec!["cat".into(), "animal".into()]),
            Video::new("cat_fails", "Cat Fails", vec!["cat".into()]),
        ]
        .into_iter()
        .collect();
        catalog.set_flag("cat_fails", Some("mean".to_string()));
        catalog
    }

    #[test]
    fn test_by_tag_sorted_by_title() {
        let results = SearchResults::by_tag(&catalog(), "ANIMAL");
        let titles: Vec<&str> = results.videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Funny Dogs"]);
    }

    #[test]
    fn test_flagged_videos_are_hidden() {
        let results = SearchResults::by_title(&catalog(), "cat");
        assert_eq!(results.videos.len(), 1);
        assert_eq!(results.videos[0].id, "amazing_cats");

        assert!(SearchResults::by_tag(&catalog(), "fails").is_empty());
    }

    #[test]
    fn test_select_range() {
        let results = SearchResults::by_tag(&catalog(), "animal");
        assert_eq!(results.select("2").unwrap().id, "funny_dogs");
        assert_eq!(results.select("1").unwrap().id, "amazing_cats");
        assert_eq!(results.select("02").unwrap().id, "funny_dogs");
        assert!(results.select(" 1 ").is_none());
        assert!(results.select("+2").is_none());
        assert!(results.select("0").is_none());
        assert!(results.select("3").is_none());
        assert!(results.select("-1").is_none());
        assert!(results.select("no").is_none());
        assert!(results.select("").is_none());
    }

    #[test]
    fn test_display() {
        let results = SearchResults::by_tag(&catalog(), "animal");
        assert_eq!(
            results.to_string(),
            "Here are the results for animal:\n  \
             1) Amazing Cats (amazing_cats) [cat, animal]\n  \
             2) Funny Dogs (funny_dogs) [dog, animal]"
        );

        let none = SearchResults::by_title(&catalog(), "blah");
        assert_eq!(none.to_string(), "No search results for blah");
    }
}
