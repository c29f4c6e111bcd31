//! Line-oriented console for the adventure.
//!
//! Reads one command per line from stdin and prints responses to stdout.
//! In interactive mode the screen is cleared and a header is drawn each
//! time the player enters a new scene; headless mode prints plain lines
//! only, so a script can pipe commands in and read the transcript out.

use adventure_core::{Game, GameError, Prompter};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, warn};

/// Stdin/stdout pair that also answers the engine's follow-up questions.
pub struct StdConsole {
    stdin: StdinLock<'static>,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }

    fn print_lines(&mut self, lines: &[String]) -> io::Result<()> {
        let mut out = self.stdout.lock();
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Show `prompt` and read one line. `None` at end of input.
    fn read_reply(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;

        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdConsole {
    fn ask(&mut self, lines: &[String], prompt: &str) -> Result<Option<String>, GameError> {
        self.print_lines(lines)?;
        Ok(self.read_reply(prompt)?)
    }
}

/// Draw the current scene, clearing the screen first in interactive mode.
fn show_scene(game: &Game, console: &mut StdConsole) -> anyhow::Result<()> {
    if game.config().clear_screen {
        console.clear()?;
        println!("{}", game.header().bold());
    }
    console.print_lines(&game.describe_scene()?)?;
    Ok(())
}

/// Run the read-eval-print loop until the player exits or input ends.
pub fn run(mut game: Game) -> anyhow::Result<()> {
    let mut console = StdConsole::new();
    let prompt = game.config().prompt.clone();

    show_scene(&game, &mut console)?;

    loop {
        println!();
        let Some(line) = console.read_reply(&prompt)? else {
            debug!("input closed");
            break;
        };

        match game.handle_line(&line, &mut console) {
            Ok(Some(response)) => {
                if response.scene_changed {
                    show_scene(&game, &mut console)?;
                } else {
                    console.print_lines(&response.lines)?;
                }
                if response.quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                let err = anyhow::Error::from(e);
                warn!(input = %line, "command failed: {err}");
                println!("Error!");
                println!("{err:?}");
            }
        }
    }

    Ok(())
}
