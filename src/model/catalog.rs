use super::Video;
use std::collections::HashMap;

/// The fixed set of known videos
///
/// Videos are kept in load order; the only mutable field after loading
/// is each video's flag reason.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All videos in load order
    videos: Vec<Video>,

    /// Position of each video in `videos`, keyed by ID
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the catalog
    ///
    /// Returns false (and leaves the catalog untouched) if the ID is taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&idx| &self.videos[idx])
    }

    /// All videos, in load order
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    /// Videos that are not flagged, in load order
    pub fn playable(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter().filter(|v| !v.is_flagged())
    }

    /// Set or clear the flag on a video. Unknown IDs are ignored.
    pub fn set_flag(&mut self, id: &str, reason: Option<String>) {
        if let Some(&idx) = self.index.get(id) {
            self.videos[idx].flag_reason = reason;
        }
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Video {
        Video::new(id, title, vec!["tag".to_string()])
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.video_count(), 0);
        assert!(catalog.all_videos().is_empty());
    }

    #[test]
    fn test_add_and_lookup() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_video(video("b", "Second")));
        assert!(catalog.add_video(video("a", "First")));

        assert_eq!(catalog.video_count(), 2);
        assert_eq!(catalog.get_video("a").unwrap().title, "First");
        assert!(catalog.get_video("missing").is_none());

        // load order, not key order
        let ids: Vec<&str> = catalog.all_videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_video(video("a", "First")));
        assert!(!catalog.add_video(video("a", "Impostor")));

        assert_eq!(catalog.video_count(), 1);
        assert_eq!(catalog.get_video("a").unwrap().title, "First");
    }

    #[test]
    fn test_set_flag() {
        let mut catalog: Catalog = vec![video("a", "A"), video("b", "B")].into_iter().collect();

        catalog.set_flag("a", Some("spam".to_string()));
        assert_eq!(
            catalog.get_video("a").unwrap().flag_reason.as_deref(),
            Some("spam")
        );
        assert_eq!(catalog.playable().count(), 1);

        catalog.set_flag("a", None);
        assert!(!catalog.get_video("a").unwrap().is_flagged());

        // no-op on unknown id
        catalog.set_flag("zzz", Some("x".to_string()));
        assert_eq!(catalog.playable().count(), 2);
    }
}
