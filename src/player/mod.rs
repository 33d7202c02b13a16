//! Command-driven player
//!
//! `Player` is the single owner of all mutable state. Each operation
//! returns an `Outcome` or a `PlayerError`; rendering them to text is left
//! to the caller.

mod controller;
mod outcome;
mod picker;
mod search;

pub use controller::{PlaybackState, Player, DEFAULT_FLAG_REASON};
pub use outcome::Outcome;
pub use picker::{FixedPicker, RandomPicker, VideoPicker};
pub use search::SearchResults;
