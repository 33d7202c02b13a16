use serde::{Deserialize, Serialize};

/// Lookup key shared by every spelling of a playlist name
pub fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

/// Represents a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, as first typed
    pub name: String,

    /// Video IDs in insertion order (references Video::id)
    pub video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    pub fn key(&self) -> String {
        playlist_key(&self.name)
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video. Returns false if it is already present.
    pub fn add_video(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video. Returns false if it was not present.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(pos) => {
                self.video_ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercase() {
        let playlist = Playlist::new("My Playlist".to_string());
        assert_eq!(playlist.key(), "my playlist");
        assert_eq!(playlist.key(), playlist_key("MY PLAYLIST"));
        assert_eq!(playlist.name, "My Playlist");
    }

    #[test]
    fn test_add_keeps_order_and_rejects_duplicates() {
        let mut playlist = Playlist::new("p".to_string());
        assert!(playlist.add_video("b".to_string()));
        assert!(playlist.add_video("a".to_string()));
        assert!(!playlist.add_video("b".to_string()));

        assert_eq!(playlist.video_ids, vec!["b", "a"]);
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_remove_missing_leaves_playlist_alone() {
        let mut playlist = Playlist::new("p".to_string());
        playlist.add_video("a".to_string());

        assert!(!playlist.remove_video("b"));
        assert_eq!(playlist.video_ids, vec!["a"]);

        assert!(playlist.remove_video("a"));
        assert!(playlist.is_empty());
    }
}
