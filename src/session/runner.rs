//! Line-oriented command loop

use super::command::{Command, HELP_TEXT, INVALID_COMMAND};
use super::config::SessionConfig;
use crate::error::PlayerResult;
use crate::loader::parse_catalog;
use crate::player::{Outcome, Player, RandomPicker, SearchResults, VideoPicker};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BANNER: &str = "Hello and welcome to YouTube, what would you like to do? \
Enter HELP for list of available commands or EXIT to terminate.";
const PROMPT: &str = "YT> ";
const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!";
const SELECTION_PROMPT: &str = "Would you like to play any of the above? \
If yes, specify the number of the video.\n\
If your answer is not a valid number, we will assume it's a no.";

/// Drives a `Player` from lines of text
pub struct Session<P: VideoPicker> {
    player: Player<P>,
    interactive: bool,
}

impl Session<RandomPicker> {
    /// Load the catalog named in the config and set up the random source
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let path = shellexpand::tilde(&config.catalog_path.to_string_lossy()).into_owned();
        let catalog = parse_catalog(&PathBuf::from(path))?;

        let picker = match config.seed {
            Some(seed) => {
                log::info!("Random playback seeded with {}", seed);
                RandomPicker::seeded(seed)
            }
            None => RandomPicker::new(),
        };

        Ok(Self::new(Player::new(catalog, picker), config.interactive))
    }
}

impl<P: VideoPicker> Session<P> {
    pub fn new(player: Player<P>, interactive: bool) -> Self {
        Self {
            player,
            interactive,
        }
    }

    pub fn player(&self) -> &Player<P> {
        &self.player
    }

    /// Read commands until EXIT or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        if self.interactive {
            writeln!(output, "{}", BANNER)?;
        }

        loop {
            if self.interactive {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }

            let Some(line) = read_line(&mut input).context("Failed to read command")? else {
                log::debug!("End of input, leaving session");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    log::debug!("Rejected {:?}: {}", line, e);
                    writeln!(output, "{}", INVALID_COMMAND)?;
                    continue;
                }
            };

            if command == Command::Exit {
                writeln!(output, "{}", FAREWELL)?;
                break;
            }

            self.execute(&command, &mut input, &mut output)?;
        }

        Ok(())
    }

    fn execute<R, W>(&mut self, command: &Command, input: &mut R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let result: PlayerResult<Outcome> = match command {
            Command::NumberOfVideos => Ok(self.player.number_of_videos()),
            Command::ShowAllVideos => Ok(self.player.show_all_videos()),
            Command::Play(video_id) => self.player.play(video_id),
            Command::PlayRandom => self.player.play_random(),
            Command::Stop => self.player.stop(),
            Command::Pause => self.player.pause(),
            Command::Continue => self.player.continue_video(),
            Command::ShowPlaying => Ok(self.player.show_playing()),
            Command::CreatePlaylist(name) => self.player.create_playlist(name),
            Command::AddToPlaylist { playlist, video_id } => {
                self.player.add_to_playlist(playlist, video_id)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.player.remove_from_playlist(playlist, video_id)
            }
            Command::ClearPlaylist(name) => self.player.clear_playlist(name),
            Command::DeletePlaylist(name) => self.player.delete_playlist(name),
            Command::ShowAllPlaylists => Ok(self.player.show_all_playlists()),
            Command::ShowPlaylist(name) => self.player.show_playlist(name),
            Command::SearchVideos(term) => {
                let results = self.player.search_by_title(term);
                return self.offer_results(results, input, output);
            }
            Command::SearchVideosWithTag(tag) => {
                let results = self.player.search_by_tag(tag);
                return self.offer_results(results, input, output);
            }
            Command::FlagVideo { video_id, reason } => {
                self.player.flag_video(video_id, reason.as_deref())
            }
            Command::AllowVideo(video_id) => self.player.allow_video(video_id),
            Command::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                return Ok(());
            }
            Command::Exit => return Ok(()),
        };

        write_result(command, result, output)
    }

    /// Print search results and play the one the user picks, if any
    fn offer_results<R, W>(
        &mut self,
        results: SearchResults,
        input: &mut R,
        output: &mut W,
    ) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", results)?;
        if results.is_empty() {
            return Ok(());
        }

        writeln!(output, "{}", SELECTION_PROMPT)?;
        output.flush()?;

        let Some(answer) = read_line(input).context("Failed to read search selection")? else {
            return Ok(());
        };

        let Some(video) = results.select(&answer) else {
            log::debug!("No search selection from {:?}", answer);
            return Ok(());
        };

        let command = Command::Play(video.id.clone());
        let result = self.player.play(&video.id);
        write_result(&command, result, output)
    }
}

/// Read one line without its terminator. Bytes that are not UTF-8 are
/// replaced rather than rejected, so the line still reaches the parser.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn write_result<W: Write>(
    command: &Command,
    result: PlayerResult<Outcome>,
    output: &mut W,
) -> Result<()> {
    match result {
        Ok(outcome) => writeln!(output, "{}", outcome)?,
        Err(e) => {
            log::debug!("{:?} failed: {:?}", command, e);
            writeln!(output, "Cannot {}: {}", command.failure_action(), e)?;
        }
    }
    Ok(())
}
