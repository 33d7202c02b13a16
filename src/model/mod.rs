//! In-memory data model for the video library
//!
//! The catalog owns every `Video`; playlists and the player refer to
//! videos by ID, so a flag set on the catalog is seen everywhere.

mod catalog;
mod playlist;
mod store;
mod video;

pub use catalog::Catalog;
pub use playlist::{playlist_key, Playlist};
pub use store::PlaylistStore;
pub use video::Video;
