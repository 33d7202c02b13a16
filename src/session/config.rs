//! Session configuration

use std::path::PathBuf;

/// Configuration for an interactive player session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Video list to load the catalog from (e.g., videos.txt)
    pub catalog_path: PathBuf,

    /// Seed for PLAY_RANDOM (None = OS entropy)
    pub seed: Option<u64>,

    /// Print the welcome banner and `YT> ` prompt before each command
    pub interactive: bool,
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            seed: None,
            interactive: true,
        }
    }

    /// Make random playback repeatable
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle banner and prompt output
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_builders() {
        let config = SessionConfig::new(PathBuf::from("videos.txt"));
        assert!(config.interactive);
        assert!(config.seed.is_none());

        let config = config.with_seed(7).with_interactive(false);
        assert_eq!(config.seed, Some(7));
        assert!(!config.interactive);
    }
}
