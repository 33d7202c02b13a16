//! Video Player - command-driven player over an in-memory video catalog
//!
//! This library loads a video list, then plays, pauses, searches, flags
//! and organizes videos into playlists in response to text commands.

pub mod error;
pub mod loader;
pub mod model;
pub mod player;
pub mod session;

pub use error::{PlayerError, PlayerResult};
pub use player::{Outcome, Player};
pub use session::{Session, SessionConfig};
