use super::{playlist_key, Catalog, Playlist, Video};
use crate::error::{PlayerError, PlayerResult};
use std::collections::BTreeMap;

/// All playlists, keyed by lowercased name
///
/// A `BTreeMap` keeps iteration in key order, which is the
/// case-insensitive order of the display names.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist, keeping the name's original case for display
    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<&Playlist> {
        let playlist = Playlist::new(name.to_string());
        let key = playlist.key();
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::AlreadyExists);
        }

        log::debug!(
            "Creating playlist {:?} ({} existing)",
            name,
            self.playlist_count()
        );
        Ok(&*self.playlists.entry(key).or_insert(playlist))
    }

    /// Case-insensitive lookup
    pub fn get_playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&playlist_key(name))
    }

    fn get_playlist_mut(&mut self, name: &str) -> PlayerResult<&mut Playlist> {
        self.playlists
            .get_mut(&playlist_key(name))
            .ok_or(PlayerError::NoSuchPlaylist)
    }

    /// Append a catalog video to a playlist
    pub fn add_video<'c>(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &'c Catalog,
    ) -> PlayerResult<&'c Video> {
        let playlist = self.get_playlist_mut(name)?;
        let video = catalog.get_video(video_id).ok_or(PlayerError::NoSuchVideo)?;
        if let Some(reason) = &video.flag_reason {
            return Err(PlayerError::Flagged(reason.clone()));
        }
        if !playlist.add_video(video.id.clone()) {
            return Err(PlayerError::AlreadyInPlaylist);
        }

        log::debug!("Added {} to playlist {:?}", video.id, playlist.name);
        Ok(video)
    }

    /// Remove a catalog video from a playlist
    pub fn remove_video<'c>(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &'c Catalog,
    ) -> PlayerResult<&'c Video> {
        let playlist = self.get_playlist_mut(name)?;
        let video = catalog.get_video(video_id).ok_or(PlayerError::NoSuchVideo)?;
        if !playlist.remove_video(&video.id) {
            return Err(PlayerError::NotInPlaylist);
        }

        log::debug!("Removed {} from playlist {:?}", video.id, playlist.name);
        Ok(video)
    }

    /// Empty a playlist; the playlist itself stays
    pub fn clear(&mut self, name: &str) -> PlayerResult<()> {
        self.get_playlist_mut(name)?.clear();
        Ok(())
    }

    /// Remove a playlist entirely
    pub fn delete(&mut self, name: &str) -> PlayerResult<Playlist> {
        self.playlists
            .remove(&playlist_key(name))
            .ok_or(PlayerError::NoSuchPlaylist)
    }

    /// All playlists, sorted by display name ignoring case
    pub fn list_all(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Resolve a playlist's videos against the catalog, in playlist order
    pub fn show_playlist<'c>(
        &self,
        name: &str,
        catalog: &'c Catalog,
    ) -> PlayerResult<Vec<&'c Video>> {
        let playlist = self.get_playlist(name).ok_or(PlayerError::NoSuchPlaylist)?;
        Ok(playlist
            .video_ids
            .iter()
            .filter_map(|id| catalog.get_video(id))
            .collect())
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}
