//! Successful command results and their user-facing wording

use crate::model::Video;
use std::fmt;

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    VideoCount(usize),
    /// Every catalog video, sorted by ID
    AllVideos(Vec<Video>),
    /// `stopped` is the title of the video that was playing before, if any
    Playing {
        stopped: Option<String>,
        title: String,
    },
    Stopped {
        title: String,
    },
    Paused {
        title: String,
    },
    AlreadyPaused {
        title: String,
    },
    Continued {
        title: String,
    },
    NowPlaying {
        video: Video,
        paused: bool,
    },
    NothingPlaying,
    PlaylistCreated {
        name: String,
    },
    AddedToPlaylist {
        playlist: String,
        title: String,
    },
    RemovedFromPlaylist {
        playlist: String,
        title: String,
    },
    PlaylistCleared {
        playlist: String,
    },
    PlaylistDeleted {
        playlist: String,
    },
    /// Display names, sorted ignoring case
    Playlists(Vec<String>),
    PlaylistContents {
        playlist: String,
        videos: Vec<Video>,
    },
    Flagged {
        stopped: Option<String>,
        title: String,
        reason: String,
    },
    FlagRemoved {
        title: String,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::VideoCount(n) => write!(f, "{} videos in the library", n),
            Outcome::AllVideos(videos) => {
                write!(f, "Here's a list of all available videos:")?;
                for video in videos {
                    write!(f, "\n  {}", video.listing())?;
                }
                Ok(())
            }
            Outcome::Playing { stopped, title } => {
                if let Some(stopped) = stopped {
                    writeln!(f, "Stopping video: {}", stopped)?;
                }
                write!(f, "Playing video: {}", title)
            }
            Outcome::Stopped { title } => write!(f, "Stopping video: {}", title),
            Outcome::Paused { title } => write!(f, "Pausing video: {}", title),
            Outcome::AlreadyPaused { title } => write!(f, "Video already paused: {}", title),
            Outcome::Continued { title } => write!(f, "Continuing video: {}", title),
            Outcome::NowPlaying { video, paused } => {
                write!(f, "{}", video)?;
                if *paused {
                    write!(f, " - PAUSED")?;
                }
                Ok(())
            }
            Outcome::NothingPlaying => write!(f, "No video is currently playing"),
            Outcome::PlaylistCreated { name } => {
                write!(f, "Successfully created new playlist: {}", name)
            }
            Outcome::AddedToPlaylist { playlist, title } => {
                write!(f, "Added video to {}: {}", playlist, title)
            }
            Outcome::RemovedFromPlaylist { playlist, title } => {
                write!(f, "Removed video from {}: {}", playlist, title)
            }
            Outcome::PlaylistCleared { playlist } => {
                write!(f, "Successfully removed all videos from {}", playlist)
            }
            Outcome::PlaylistDeleted { playlist } => write!(f, "Deleted playlist: {}", playlist),
            Outcome::Playlists(names) => {
                if names.is_empty() {
                    return write!(f, "No playlists exist yet");
                }
                write!(f, "Showing all playlists:")?;
                for name in names {
                    write!(f, "\n  {}", name)?;
                }
                Ok(())
            }
            Outcome::PlaylistContents { playlist, videos } => {
                write!(f, "Showing playlist: {}", playlist)?;
                if videos.is_empty() {
                    return write!(f, "\n  No videos here yet");
                }
                for video in videos {
                    write!(f, "\n  {}", video.listing())?;
                }
                Ok(())
            }
            Outcome::Flagged {
                stopped,
                title,
                reason,
            } => {
                if let Some(stopped) = stopped {
                    writeln!(f, "Stopping video: {}", stopped)?;
                }
                write!(f, "Successfully flagged video: {} (reason: {})", title, reason)
            }
            Outcome::FlagRemoved { title } => {
                write!(f, "Successfully removed flag from video: {}", title)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_after_stop_wording() {
        let outcome = Outcome::Playing {
            stopped: Some("Amazing Cats".to_string()),
            title: "Funny Dogs".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Stopping video: Amazing Cats\nPlaying video: Funny Dogs"
        );
    }

    #[test]
    fn test_now_playing_paused_suffix() {
        let video = Video::new("amazing_cats", "Amazing Cats", vec!["cat".into(), "animal".into()]);
        let outcome = Outcome::NowPlaying { video, paused: true };
        assert_eq!(
            outcome.to_string(),
            "Amazing Cats (amazing_cats) [cat, animal] - PAUSED"
        );
    }

    #[test]
    fn test_empty_listings() {
        assert_eq!(Outcome::Playlists(Vec::new()).to_string(), "No playlists exist yet");
        let empty = Outcome::PlaylistContents {
            playlist: "Mix".to_string(),
            videos: Vec::new(),
        };
        assert_eq!(empty.to_string(), "Showing playlist: Mix\n  No videos here yet");
    }
}
