use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in load order, without duplicates
    pub tags: Vec<String>,

    /// Reason this video was flagged (None = playable)
    pub flag_reason: Option<String>,
}

impl Video {
    /// Create a new unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }

        Self {
            id: id.into(),
            title: title.into(),
            tags: unique,
            flag_reason: None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flag_reason.is_some()
    }

    /// Case-insensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive title substring match
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Listing form, including the flag marker when flagged
    pub fn listing(&self) -> String {
        match &self.flag_reason {
            Some(reason) => format!("{} - FLAGGED (reason: {})", self, reason),
            None => self.to_string(),
        }
    }
}

/// `Title (id) [tag, tag]`
impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> Video {
        Video::new(
            "amazing_cats",
            "Amazing Cats",
            vec!["cat".to_string(), "animal".to_string()],
        )
    }

    #[test]
    fn test_display_format() {
        assert_eq!(cats().to_string(), "Amazing Cats (amazing_cats) [cat, animal]");
    }

    #[test]
    fn test_display_without_tags() {
        let video = Video::new("bare", "Bare", Vec::new());
        assert_eq!(video.to_string(), "Bare (bare) []");
    }

    #[test]
    fn test_duplicate_tags_dropped() {
        let video = Video::new(
            "v",
            "V",
            vec!["a".to_string(), "b".to_string(), "a".to_string()],
        );
        assert_eq!(video.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let video = cats();
        assert!(video.has_tag("ANIMAL"));
        assert!(!video.has_tag("dog"));
        assert!(video.title_contains("cAt"));
        assert!(!video.title_contains("dogs"));
    }

    #[test]
    fn test_listing_shows_flag() {
        let mut video = cats();
        assert_eq!(video.listing(), "Amazing Cats (amazing_cats) [cat, animal]");

        video.flag_reason = Some("dont_like_cats".to_string());
        assert_eq!(
            video.listing(),
            "Amazing Cats (amazing_cats) [cat, animal] - FLAGGED (reason: dont_like_cats)"
        );
    }
}
