use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::{Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Command-driven video player over a text video list", long_about = None)]
struct Args {
    /// Path to the video list (one `Title | id | tag, tag` entry per line)
    #[arg(short = 'c', long, default_value = "videos.txt")]
    catalog: PathBuf,

    /// Seed for PLAY_RANDOM, for repeatable sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the welcome banner or the command prompt
    #[arg(long)]
    no_prompt: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = SessionConfig::new(args.catalog).with_interactive(!args.no_prompt);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = Session::from_config(&config)?;
    log::info!(
        "Library loaded: {} videos",
        session.player().catalog().video_count()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
