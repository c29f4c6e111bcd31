//! Text adventure console.
//!
//! Walk between rooms, pick things up, and use them on each other to find
//! the way out.
//!
//! # Headless Mode
//!
//! Run with `--headless` for plain line output suitable for scripted play:
//!
//! ```bash
//! printf 'go north\ninspect\nexit\n' | cargo run -p adventure -- --headless --no-confirm
//! ```

mod console;

use adventure_core::{scenario, Game, GameConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Game text goes to stdout; keep logs quiet on stderr unless RUST_LOG asks.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let config = parse_config_from_args(&args);
    let game = Game::new(scenario::the_beginning(), config)?;
    console::run(game)
}

/// Parse game configuration from command line arguments.
fn parse_config_from_args(args: &[String]) -> GameConfig {
    let mut config = if args.iter().any(|a| a == "--headless") {
        GameConfig::headless()
    } else {
        GameConfig::default()
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--no-confirm" => {
                config.confirm_exit = false;
            }
            "--title" => {
                if let Some(title) = args.get(i + 1) {
                    config.title = title.clone();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Text Adventure - find your way out");
    println!();
    println!("USAGE:");
    println!("  adventure [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help        Show this help message");
    println!("  --headless        Plain line output, no screen clearing");
    println!("  --no-confirm      Exit without asking for confirmation");
    println!("  --title <TEXT>    Title shown in the header (default: Text Adventure)");
    println!();
    println!("COMMANDS:");
    println!("  go <direction>           Walk north, east, south or west");
    println!("  inventory                List what you carry");
    println!("  take <name>              Pick something up");
    println!("  drop <name>              Put something down");
    println!("  inspect [name]           Look around, or at something");
    println!("  use <name> on <name>     Use something you carry on something else");
    println!("  exit                     Leave the game");
    println!();
    println!("LOGGING:");
    println!("  RUST_LOG=debug adventure  # log commands and moves to stderr");
}
