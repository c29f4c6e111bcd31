//! Game configuration.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Title shown in the header line above each scene.
    pub title: String,

    /// Clear the terminal before showing a new scene.
    pub clear_screen: bool,

    /// Ask "Are you sure (Y/N)?" before exiting.
    pub confirm_exit: bool,

    /// Prompt shown while waiting for a command.
    pub prompt: String,

    /// Most recent commands kept in the transcript. Older entries are dropped.
    pub transcript_limit: usize,
}

impl GameConfig {
    /// Create a config with the given header title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Plain line output for scripts: no screen clearing.
    pub fn headless() -> Self {
        Self {
            clear_screen: false,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_transcript_limit(mut self, limit: usize) -> Self {
        self.transcript_limit = limit;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Text Adventure".to_string(),
            clear_screen: true,
            confirm_exit: true,
            prompt: ">: ".to_string(),
            transcript_limit: 100,
        }
    }
}
