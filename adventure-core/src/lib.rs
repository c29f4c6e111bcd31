//! Text adventure engine.
//!
//! This crate provides:
//! - A scene graph of rooms, directional connections and props
//! - Scripted one-shot use effects ("use key on door")
//! - A command parser and the session engine that executes commands
//! - The built-in adventure and a test harness
//!
//! # Quick Start
//!
//! ```ignore
//! use adventure_core::{scenario, Game, GameConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut game = Game::new(scenario::the_beginning(), GameConfig::default())?;
//!     let mut prompter = MyConsole::new();
//!
//!     for line in game.describe_scene()? {
//!         println!("{line}");
//!     }
//!     if let Some(response) = game.handle_line("go north", &mut prompter)? {
//!         for line in response.lines {
//!             println!("{line}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod effects;
pub mod error;
pub mod prompt;
pub mod scenario;
pub mod session;
pub mod testing;
pub mod world;

// Primary public API
pub use command::Command;
pub use config::GameConfig;
pub use effects::{EffectAction, Event, UseEffect};
pub use error::{GameError, Result};
pub use prompt::Prompter;
pub use session::{Game, Response, TranscriptEntry};
pub use testing::{ScriptedPrompter, TestHarness};
pub use world::{Connection, Direction, Player, Prop, Scene, World};
