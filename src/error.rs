//! Errors surfaced by player and playlist operations

use thiserror::Error;

/// Why a command could not be carried out
///
/// The messages are the reason half of `Cannot <action>: <reason>`; the
/// session supplies the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("Video does not exist")]
    NoSuchVideo,

    #[error("Playlist does not exist")]
    NoSuchPlaylist,

    #[error("A playlist with the same name already exists")]
    AlreadyExists,

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video is currently flagged (reason: {0})")]
    Flagged(String),

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("No videos available")]
    NoVideosAvailable,
}

pub type PlayerResult<T> = std::result::Result<T, PlayerError>;
