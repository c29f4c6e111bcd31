//! Testing utilities for the adventure.
//!
//! This module provides tools for integration testing:
//! - `ScriptedPrompter` answers follow-up questions from a fixed script
//! - `TestHarness` drives a game line by line and collects the output
//! - Assertion helpers for verifying game state

use crate::config::GameConfig;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::scenario;
use crate::session::{Game, Response};
use crate::world::{Named, World};
use std::collections::VecDeque;

/// A prompter that replies from a script instead of reading stdin.
///
/// Everything it is asked to print is kept, so tests can check the exact
/// wording of a question. When the script runs out it reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Queue another reply.
    pub fn push_reply(&mut self, reply: impl Into<String>) {
        self.replies.push_back(reply.into());
    }

    /// Lines printed while asking, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown, one per question.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// How many questions were asked.
    pub fn questions_asked(&self) -> usize {
        self.prompts.len()
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, lines: &[String], prompt: &str) -> Result<Option<String>> {
        self.output.extend(lines.iter().cloned());
        self.prompts.push(prompt.to_string());
        Ok(self.replies.pop_front())
    }
}

/// Test harness for running game scenarios.
pub struct TestHarness {
    /// The game under test.
    pub game: Game,
    /// Answers for disambiguation and exit prompts.
    pub prompter: ScriptedPrompter,
}

impl TestHarness {
    /// Create a harness around the built-in adventure.
    pub fn new() -> Self {
        Self::with_world(scenario::the_beginning())
    }

    /// Create a harness around a custom world.
    ///
    /// Panics if the world does not validate.
    pub fn with_world(world: World) -> Self {
        let config = GameConfig::headless();
        let game = Game::new(world, config).expect("test world should validate");
        Self {
            game,
            prompter: ScriptedPrompter::default(),
        }
    }

    /// Queue an answer for the next follow-up question.
    pub fn answer(&mut self, reply: impl Into<String>) -> &mut Self {
        self.prompter.push_reply(reply);
        self
    }

    /// Send a line of input. Unrecognised input yields an empty response.
    pub fn input(&mut self, line: &str) -> Response {
        self.game
            .handle_line(line, &mut self.prompter)
            .expect("command should not fail")
            .unwrap_or_default()
    }

    /// Send several lines, returning the last response.
    pub fn script(&mut self, lines: &[&str]) -> Response {
        let mut last = Response::default();
        for line in lines {
            last = self.input(line);
        }
        last
    }

    /// Name of the scene the player is in.
    pub fn scene_name(&self) -> &str {
        &self
            .game
            .current_scene()
            .expect("current scene should exist")
            .name
    }

    /// Whether the player carries a prop with this name.
    pub fn carries(&self, name: &str) -> bool {
        self.game.player().inventory.iter().any(|p| p.matches(name))
    }

    /// Whether a prop with this name lies in the current scene.
    pub fn scene_has(&self, name: &str) -> bool {
        self.game
            .current_scene()
            .map(|s| s.props.iter().any(|p| p.matches(name)))
            .unwrap_or(false)
    }

    /// Total number of props in every scene plus the inventory,
    /// not counting props nested inside others.
    pub fn loose_prop_count(&self) -> usize {
        let in_scenes: usize = self.game.world().scenes.values().map(|s| s.props.len()).sum();
        in_scenes + self.game.player().inventory.len()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the player is in the named scene.
#[track_caller]
pub fn assert_scene(harness: &TestHarness, name: &str) {
    let actual = harness.scene_name();
    assert_eq!(actual, name, "Expected to be in '{name}', but in '{actual}'");
}

/// Assert the player carries a prop with this name.
#[track_caller]
pub fn assert_carries(harness: &TestHarness, name: &str) {
    assert!(
        harness.carries(name),
        "Expected '{name}' in inventory, found: {:?}",
        harness
            .game
            .player()
            .inventory
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
    );
}

/// Assert the player does NOT carry a prop with this name.
#[track_caller]
pub fn assert_not_carrying(harness: &TestHarness, name: &str) {
    assert!(
        !harness.carries(name),
        "Expected '{name}' NOT to be in inventory"
    );
}

/// Assert the player has this much experience.
#[track_caller]
pub fn assert_experience(harness: &TestHarness, expected: u32) {
    let actual = harness.game.experience();
    assert_eq!(actual, expected, "Expected {expected} XP, got {actual}");
}

/// Assert a response printed exactly one line with this text.
#[track_caller]
pub fn assert_says(response: &Response, expected: &str) {
    assert_eq!(
        response.lines,
        vec![expected.to_string()],
        "Unexpected response text"
    );
}
