//! Command line parsing

use std::str::FromStr;
use thiserror::Error;

/// One parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// A line that could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} takes {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Shown for any line that fails to parse
pub const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all video from the playlist with a given name.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist with a given name.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SHOW_PLAYLIST <playlist_name> - Display all the videos in the given playlist.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

fn expect_args(command: &'static str, args: &[&str], n: usize) -> Result<(), CommandError> {
    if args.len() != n {
        return Err(CommandError::WrongArity {
            command,
            expected: n,
            got: args.len(),
        });
    }
    Ok(())
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => {
                expect_args("NUMBER_OF_VIDEOS", &args, 0)?;
                Command::NumberOfVideos
            }
            "SHOW_ALL_VIDEOS" => {
                expect_args("SHOW_ALL_VIDEOS", &args, 0)?;
                Command::ShowAllVideos
            }
            "PLAY" => {
                expect_args("PLAY", &args, 1)?;
                Command::Play(args[0].to_string())
            }
            "PLAY_RANDOM" => {
                expect_args("PLAY_RANDOM", &args, 0)?;
                Command::PlayRandom
            }
            "STOP" => {
                expect_args("STOP", &args, 0)?;
                Command::Stop
            }
            "PAUSE" => {
                expect_args("PAUSE", &args, 0)?;
                Command::Pause
            }
            "CONTINUE" => {
                expect_args("CONTINUE", &args, 0)?;
                Command::Continue
            }
            "SHOW_PLAYING" => {
                expect_args("SHOW_PLAYING", &args, 0)?;
                Command::ShowPlaying
            }
            "CREATE_PLAYLIST" => {
                expect_args("CREATE_PLAYLIST", &args, 1)?;
                Command::CreatePlaylist(args[0].to_string())
            }
            "ADD_TO_PLAYLIST" => {
                expect_args("ADD_TO_PLAYLIST", &args, 2)?;
                Command::AddToPlaylist {
                    playlist: args[0].to_string(),
                    video_id: args[1].to_string(),
                }
            }
            "REMOVE_FROM_PLAYLIST" => {
                expect_args("REMOVE_FROM_PLAYLIST", &args, 2)?;
                Command::RemoveFromPlaylist {
                    playlist: args[0].to_string(),
                    video_id: args[1].to_string(),
                }
            }
            "CLEAR_PLAYLIST" => {
                expect_args("CLEAR_PLAYLIST", &args, 1)?;
                Command::ClearPlaylist(args[0].to_string())
            }
            "DELETE_PLAYLIST" => {
                expect_args("DELETE_PLAYLIST", &args, 1)?;
                Command::DeletePlaylist(args[0].to_string())
            }
            "SHOW_ALL_PLAYLISTS" => {
                expect_args("SHOW_ALL_PLAYLISTS", &args, 0)?;
                Command::ShowAllPlaylists
            }
            "SHOW_PLAYLIST" => {
                expect_args("SHOW_PLAYLIST", &args, 1)?;
                Command::ShowPlaylist(args[0].to_string())
            }
            "SEARCH_VIDEOS" => {
                expect_args("SEARCH_VIDEOS", &args, 1)?;
                Command::SearchVideos(args[0].to_string())
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                expect_args("SEARCH_VIDEOS_WITH_TAG", &args, 1)?;
                Command::SearchVideosWithTag(args[0].to_string())
            }
            "FLAG_VIDEO" => match args.split_first() {
                Some((video_id, rest)) => Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: (!rest.is_empty()).then(|| rest.join(" ")),
                },
                None => {
                    return Err(CommandError::WrongArity {
                        command: "FLAG_VIDEO",
                        expected: 1,
                        got: 0,
                    })
                }
            },
            "ALLOW_VIDEO" => {
                expect_args("ALLOW_VIDEO", &args, 1)?;
                Command::AllowVideo(args[0].to_string())
            }
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}

impl Command {
    /// The `<action>` in `Cannot <action>: <reason>`
    pub fn failure_action(&self) -> String {
        match self {
            Command::Play(_) | Command::PlayRandom => "play video".to_string(),
            Command::Stop => "stop video".to_string(),
            Command::Pause => "pause video".to_string(),
            Command::Continue => "continue video".to_string(),
            Command::CreatePlaylist(_) => "create playlist".to_string(),
            Command::AddToPlaylist { playlist, .. } => format!("add video to {}", playlist),
            Command::RemoveFromPlaylist { playlist, .. } => {
                format!("remove video from {}", playlist)
            }
            Command::ClearPlaylist(name) => format!("clear playlist {}", name),
            Command::DeletePlaylist(name) => format!("delete playlist {}", name),
            Command::ShowPlaylist(name) => format!("show playlist {}", name),
            Command::FlagVideo { .. } => "flag video".to_string(),
            Command::AllowVideo(_) => "remove flag from video".to_string(),
            _ => "run command".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            "play amazing_cats".parse::<Command>(),
            Ok(Command::Play("amazing_cats".to_string()))
        );
        assert_eq!("Show_Playing".parse::<Command>(), Ok(Command::ShowPlaying));
        assert_eq!("  exit  ".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_arguments_keep_their_case() {
        assert_eq!(
            "ADD_TO_PLAYLIST My_List Funny_Dogs".parse::<Command>(),
            Ok(Command::AddToPlaylist {
                playlist: "My_List".to_string(),
                video_id: "Funny_Dogs".to_string(),
            })
        );
    }

    #[test]
    fn test_flag_reason_is_optional_and_joined() {
        assert_eq!(
            "FLAG_VIDEO v1".parse::<Command>(),
            Ok(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: None
            })
        );
        assert_eq!(
            "FLAG_VIDEO v1 not for kids".parse::<Command>(),
            Ok(Command::FlagVideo {
                video_id: "v1".to_string(),
                reason: Some("not for kids".to_string())
            })
        );
    }

    #[test]
    fn test_invalid_lines() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("DANCE".to_string()))
        );
        assert!(matches!(
            "PLAY".parse::<Command>(),
            Err(CommandError::WrongArity { command: "PLAY", got: 0, .. })
        ));
        assert!(matches!(
            "STOP now".parse::<Command>(),
            Err(CommandError::WrongArity { command: "STOP", got: 1, .. })
        ));
        assert!("FLAG_VIDEO".parse::<Command>().is_err());
    }

    #[test]
    fn test_failure_action() {
        let cmd: Command = "remove_from_playlist Mix v1".parse().unwrap();
        assert_eq!(cmd.failure_action(), "remove video from Mix");
        assert_eq!(Command::PlayRandom.failure_action(), "play video");
        assert_eq!(
            Command::AllowVideo("v".to_string()).failure_action(),
            "remove flag from video"
        );
    }
}
