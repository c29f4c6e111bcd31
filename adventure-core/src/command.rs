//! Player command parsing.
//!
//! Input is split on whitespace and matched against a fixed set of verbs.
//! Names may span several words, so `take pile of bones` works. Anything
//! that does not fit a known shape parses to `None`, and the game loop
//! ignores it.

/// A command the player can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `go <direction>`
    Go(String),
    /// `inventory`
    Inventory,
    /// `take <name>`
    Take(String),
    /// `drop <name>`
    Drop(String),
    /// `inspect` with no argument looks around the current scene
    Look,
    /// `inspect <name>`
    Inspect(String),
    /// `use <implement> on <target>`
    Use { implement: String, target: String },
    /// `exit`
    Exit,
}

impl Command {
    /// Parse a line of player input.
    pub fn parse(line: &str) -> Option<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            ["go", direction] => Some(Command::Go(direction.to_string())),
            ["inventory"] => Some(Command::Inventory),
            ["take", rest @ ..] if !rest.is_empty() => Some(Command::Take(rest.join(" "))),
            ["drop", rest @ ..] if !rest.is_empty() => Some(Command::Drop(rest.join(" "))),
            ["inspect"] => Some(Command::Look),
            ["inspect", rest @ ..] => Some(Command::Inspect(rest.join(" "))),
            ["use", rest @ ..] => parse_use(rest),
            ["exit"] => Some(Command::Exit),
            _ => None,
        }
    }

    /// The verb, for logging.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Go(_) => "go",
            Command::Inventory => "inventory",
            Command::Take(_) => "take",
            Command::Drop(_) => "drop",
            Command::Look | Command::Inspect(_) => "inspect",
            Command::Use { .. } => "use",
            Command::Exit => "exit",
        }
    }
}

/// Split `<implement...> on <target...>` at the first standalone `on`.
fn parse_use(words: &[&str]) -> Option<Command> {
    // The implement needs at least one word, so `on` cannot be first.
    let split = words.iter().skip(1).position(|w| *w == "on")? + 1;
    let (implement, target) = (&words[..split], &words[split + 1..]);
    if target.is_empty() {
        return None;
    }

    Some(Command::Use {
        implement: implement.join(" "),
        target: target.join(" "),
    })
}
