//! Player controller: playback state machine plus playlist and flag commands

use super::outcome::Outcome;
use super::picker::VideoPicker;
use super::search::SearchResults;
use crate::error::{PlayerError, PlayerResult};
use crate::model::{Catalog, PlaylistStore, Video};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Playback state. Paused always carries a video, so "paused with
/// nothing loaded" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing {
        video_id: String,
    },
    Paused {
        video_id: String,
    },
}

impl PlaybackState {
    pub fn current_video_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing { video_id } | PlaybackState::Paused { video_id } => {
                Some(video_id)
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused { .. })
    }
}

/// Owns the catalog, the playlists and the playback state
pub struct Player<P: VideoPicker> {
    catalog: Catalog,
    playlists: PlaylistStore,
    state: PlaybackState,
    picker: P,
}

impl<P: VideoPicker> Player<P> {
    /// Create an idle player over a loaded catalog
    pub fn new(catalog: Catalog, picker: P) -> Self {
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            state: PlaybackState::Idle,
            picker,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The video currently playing or paused
    pub fn current_video(&self) -> Option<&Video> {
        self.state
            .current_video_id()
            .and_then(|id| self.catalog.get_video(id))
    }

    fn current_title(&self) -> PlayerResult<String> {
        self.current_video()
            .map(|v| v.title.clone())
            .ok_or(PlayerError::NothingPlaying)
    }

    pub fn number_of_videos(&self) -> Outcome {
        Outcome::VideoCount(self.catalog.video_count())
    }

    /// Every video, ordered by ID
    pub fn show_all_videos(&self) -> Outcome {
        let mut videos = self.catalog.all_videos().to_vec();
        videos.sort_by(|a, b| a.id.cmp(&b.id));
        Outcome::AllVideos(videos)
    }

    // ---- Playback ----

    /// Play a video, stopping whatever was playing first
    pub fn play(&mut self, video_id: &str) -> PlayerResult<Outcome> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::NoSuchVideo)?;
        if let Some(reason) = &video.flag_reason {
            return Err(PlayerError::Flagged(reason.clone()));
        }
        let title = video.title.clone();
        let video_id = video.id.clone();

        let stopped = self.current_title().ok();
        log::debug!("Playing {} (stopped: {:?})", video_id, stopped);
        self.state = PlaybackState::Playing { video_id };

        Ok(Outcome::Playing { stopped, title })
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random(&mut self) -> PlayerResult<Outcome> {
        let candidates: Vec<String> = self.catalog.playable().map(|v| v.id.clone()).collect();
        if candidates.is_empty() {
            return Err(PlayerError::NoVideosAvailable);
        }

        let idx = self.picker.pick(candidates.len());
        let video_id = candidates
            .get(idx)
            .ok_or(PlayerError::NoVideosAvailable)?;
        self.play(video_id)
    }

    pub fn stop(&mut self) -> PlayerResult<Outcome> {
        let title = self.current_title()?;
        log::debug!("Stopping {:?}", title);
        self.state = PlaybackState::Idle;
        Ok(Outcome::Stopped { title })
    }

    pub fn pause(&mut self) -> PlayerResult<Outcome> {
        let title = self.current_title()?;
        let next = match &self.state {
            PlaybackState::Paused { .. } => return Ok(Outcome::AlreadyPaused { title }),
            PlaybackState::Playing { video_id } => PlaybackState::Paused {
                video_id: video_id.clone(),
            },
            PlaybackState::Idle => return Err(PlayerError::NothingPlaying),
        };
        self.state = next;
        Ok(Outcome::Paused { title })
    }

    /// Resume a paused video
    pub fn continue_video(&mut self) -> PlayerResult<Outcome> {
        let title = self.current_title()?;
        let next = match &self.state {
            PlaybackState::Paused { video_id } => PlaybackState::Playing {
                video_id: video_id.clone(),
            },
            PlaybackState::Playing { .. } => return Err(PlayerError::NotPaused),
            PlaybackState::Idle => return Err(PlayerError::NothingPlaying),
        };
        self.state = next;
        Ok(Outcome::Continued { title })
    }

    pub fn show_playing(&self) -> Outcome {
        match self.current_video() {
            Some(video) => Outcome::NowPlaying {
                video: video.clone(),
                paused: self.state.is_paused(),
            },
            None => Outcome::NothingPlaying,
        }
    }

    // ---- Playlists ----

    pub fn create_playlist(&mut self, name: &str) -> PlayerResult<Outcome> {
        let playlist = self.playlists.create_playlist(name)?;
        Ok(Outcome::PlaylistCreated {
            name: playlist.name.clone(),
        })
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<Outcome> {
        let video = self.playlists.add_video(name, video_id, &self.catalog)?;
        Ok(Outcome::AddedToPlaylist {
            playlist: name.to_string(),
            title: video.title.clone(),
        })
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> PlayerResult<Outcome> {
        let video = self.playlists.remove_video(name, video_id, &self.catalog)?;
        Ok(Outcome::RemovedFromPlaylist {
            playlist: name.to_string(),
            title: video.title.clone(),
        })
    }

    pub fn clear_playlist(&mut self, name: &str) -> PlayerResult<Outcome> {
        self.playlists.clear(name)?;
        Ok(Outcome::PlaylistCleared {
            playlist: name.to_string(),
        })
    }

    pub fn delete_playlist(&mut self, name: &str) -> PlayerResult<Outcome> {
        self.playlists.delete(name)?;
        Ok(Outcome::PlaylistDeleted {
            playlist: name.to_string(),
        })
    }

    pub fn show_all_playlists(&self) -> Outcome {
        Outcome::Playlists(self.playlists.list_all().map(|p| p.name.clone()).collect())
    }

    pub fn show_playlist(&self, name: &str) -> PlayerResult<Outcome> {
        let videos = self.playlists.show_playlist(name, &self.catalog)?;
        Ok(Outcome::PlaylistContents {
            playlist: name.to_string(),
            videos: videos.into_iter().cloned().collect(),
        })
    }

    // ---- Search ----

    pub fn search_by_title(&self, term: &str) -> SearchResults {
        SearchResults::by_title(&self.catalog, term)
    }

    pub fn search_by_tag(&self, tag: &str) -> SearchResults {
        SearchResults::by_tag(&self.catalog, tag)
    }

    // ---- Moderation ----

    /// Flag a video, stopping it first if it is the one playing
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> PlayerResult<Outcome> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::NoSuchVideo)?;
        if video.is_flagged() {
            return Err(PlayerError::AlreadyFlagged);
        }
        let title = video.title.clone();
        let video_id = video.id.clone();
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_FLAG_REASON)
            .to_string();

        let stopped = if self.state.current_video_id() == Some(video_id.as_str()) {
            Some(self.current_title()?)
        } else {
            None
        };
        if stopped.is_some() {
            self.state = PlaybackState::Idle;
        }

        log::debug!("Flagging {} (reason: {})", video_id, reason);
        self.catalog.set_flag(&video_id, Some(reason.clone()));

        Ok(Outcome::Flagged {
            stopped,
            title,
            reason,
        })
    }

    /// Clear a video's flag
    pub fn allow_video(&mut self, video_id: &str) -> PlayerResult<Outcome> {
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(PlayerError::NoSuchVideo)?;
        if !video.is_flagged() {
            return Err(PlayerError::NotFlagged);
        }
        let title = video.title.clone();
        let video_id = video.id.clone();

        log::debug!("Allowing {}", video_id);
        self.catalog.set_flag(&video_id, None);

        Ok(Outcome::FlagRemoved { title })
    }
}
