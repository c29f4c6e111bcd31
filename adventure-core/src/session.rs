//! Game - the command engine behind the console.
//!
//! This module wraps the `World`, the `Player` and the current scene into a
//! single session that executes parsed commands. Every command produces a
//! `Response`: the lines to print, the events that happened, and whether
//! the scene changed or the player asked to quit.

use crate::command::Command;
use crate::config::GameConfig;
use crate::effects::{apply_effect, EffectTarget, Event};
use crate::error::Result;
use crate::prompt::{choose, confirm, Prompter};
use crate::world::{
    join_names, position_by_name, Connection, Direction, Named, Player, Prop, Scene, SceneId,
    World,
};
use std::collections::VecDeque;
use tracing::debug;

/// Result of executing one command.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Text to show the player, one entry per line.
    pub lines: Vec<String>,

    /// State changes caused by the command.
    pub events: Vec<Event>,

    /// The player is now in a different scene.
    pub scene_changed: bool,

    /// The player confirmed they want to leave.
    pub quit: bool,
}

impl Response {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

/// An entry in the game transcript.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Raw player input.
    pub input: String,
    /// Lines printed in response.
    pub output: Vec<String>,
    /// Turn number, starting at 1.
    pub turn: usize,
}

/// Something the player can refer to by name in the current scene.
#[derive(Clone, Copy)]
enum Candidate<'a> {
    Prop(&'a Prop),
    Connection(&'a Connection),
}

impl Candidate<'_> {
    fn disambiguating_name(&self) -> &str {
        match self {
            Candidate::Prop(p) => p.disambiguating_name(),
            Candidate::Connection(c) => c.disambiguating_name(),
        }
    }
}

/// A single-player adventure in progress.
pub struct Game {
    world: World,
    player: Player,
    current: SceneId,
    config: GameConfig,
    transcript: VecDeque<TranscriptEntry>,
    turn: usize,
}

impl Game {
    /// Start a game in the world's starting scene.
    ///
    /// Fails if the world does not validate.
    pub fn new(world: World, config: GameConfig) -> Result<Self> {
        world.validate()?;
        let current = world.start;

        Ok(Self {
            world,
            player: Player::new(),
            current,
            config,
            transcript: VecDeque::new(),
            turn: 0,
        })
    }

    /// Parse and execute one line of input.
    ///
    /// Returns `None` for input that is not a command; such lines are
    /// ignored and leave no trace in the transcript.
    pub fn handle_line<P>(&mut self, line: &str, prompter: &mut P) -> Result<Option<Response>>
    where
        P: Prompter + ?Sized,
    {
        let Some(command) = Command::parse(line) else {
            debug!(input = line, "ignoring unrecognised input");
            return Ok(None);
        };

        let response = self.execute(command, prompter)?;
        self.record(line, &response);
        Ok(Some(response))
    }

    fn record(&mut self, line: &str, response: &Response) {
        self.turn += 1;
        if self.config.transcript_limit == 0 {
            return;
        }
        if self.transcript.len() == self.config.transcript_limit {
            self.transcript.pop_front();
        }
        self.transcript.push_back(TranscriptEntry {
            input: line.to_string(),
            output: response.lines.clone(),
            turn: self.turn,
        });
    }

    /// Execute a parsed command.
    pub fn execute<P>(&mut self, command: Command, prompter: &mut P) -> Result<Response>
    where
        P: Prompter + ?Sized,
    {
        debug!(verb = command.verb(), "executing command");

        match command {
            Command::Go(direction) => self.go(&direction),
            Command::Inventory => Ok(self.inventory()),
            Command::Take(name) => self.take(&name),
            Command::Drop(name) => self.drop(&name),
            Command::Look => self.look(),
            Command::Inspect(name) => self.inspect(&name, prompter),
            Command::Use { implement, target } => self.use_on(&implement, &target, prompter),
            Command::Exit => self.exit(prompter),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn go(&mut self, input: &str) -> Result<Response> {
        let input = input.trim();
        let Some(direction) = Direction::parse(input) else {
            return Ok(Response::say(format!("{input} is not a valid direction.")));
        };

        let scene = self.current_scene()?;
        let Some(connection) = scene.connections.get(&direction) else {
            return Ok(Response::say(format!(
                "There is no escape to the {}.",
                input.to_lowercase()
            )));
        };

        if connection.locked {
            return Ok(Response::say(connection.blocked_message.clone()));
        }

        let from = self.current;
        let to = connection.to;
        self.current = to;
        debug!(%from, %to, %direction, "player moved");

        let mut response = Response::lines(self.describe_scene()?).with_event(Event::Moved { from, to });
        response.scene_changed = true;
        Ok(response)
    }

    fn inventory(&self) -> Response {
        if self.player.inventory.is_empty() {
            return Response::say("You have nothing.");
        }
        Response::say(format!("You have a {}.", join_names(&self.player.inventory)))
    }

    fn take(&mut self, input: &str) -> Result<Response> {
        let input = input.trim().to_lowercase();
        let current = self.current;
        let scene = self.world.scene_mut(current)?;

        let Some(index) = position_by_name(&scene.props, &input) else {
            return Ok(Response::say(format!("There is no {input} here.")));
        };

        let prop = scene.props.remove(index);
        let response = Response::say(format!("The {} is in your inventory.", prop.name))
            .with_event(Event::PropTaken(prop.id));
        self.player.inventory.push(prop);
        Ok(response)
    }

    fn drop(&mut self, input: &str) -> Result<Response> {
        let input = input.trim().to_lowercase();

        let Some(index) = position_by_name(&self.player.inventory, &input) else {
            return Ok(Response::say(format!("There is no {input} in your inventory.")));
        };

        let current = self.current;
        let scene = self.world.scene_mut(current)?;
        let prop = self.player.inventory.remove(index);
        let response = Response::say(format!("The {} falls to the floor.", prop.name))
            .with_event(Event::PropDropped(prop.id));
        scene.props.push(prop);
        Ok(response)
    }

    fn look(&self) -> Result<Response> {
        let scene = self.current_scene()?;
        let mut lines = Vec::new();

        if !scene.props.is_empty() {
            lines.push(String::new());
            lines.push(format!("You see a {}.", join_names(&scene.props)));
        }

        if !scene.connections.is_empty() {
            let directions: Vec<_> = scene.connections.keys().map(|d| d.name()).collect();
            lines.push(String::new());
            lines.push(format!(
                "There are passageways to the {}.",
                directions.join(", ")
            ));
        }

        Ok(Response::lines(lines))
    }

    fn inspect<P>(&mut self, input: &str, prompter: &mut P) -> Result<Response>
    where
        P: Prompter + ?Sized,
    {
        let input = input.trim().to_lowercase();
        let scene = self.world.scene(self.current)?;

        let candidates: Vec<Candidate<'_>> = scene
            .props
            .iter()
            .chain(self.player.inventory.iter())
            .filter(|p| p.matches(&input))
            .map(Candidate::Prop)
            .chain(
                scene
                    .connections
                    .values()
                    .filter(|c| c.matches(&input))
                    .map(Candidate::Connection),
            )
            .collect();

        let names: Vec<&str> = candidates.iter().map(|c| c.disambiguating_name()).collect();
        let Some(choice) = choose(prompter, &input, &names)? else {
            return Ok(Response::say(format!("There is no {input} to inspect.")));
        };

        let lines = match candidates[choice] {
            Candidate::Prop(prop) => {
                let mut lines = vec![prop.name.clone(), prop.description.clone()];
                if !prop.contents.is_empty() {
                    lines.push(format!(
                        "The {} contains a {}.",
                        prop.name,
                        join_names(&prop.contents)
                    ));
                }
                lines
            }
            Candidate::Connection(connection) => {
                vec![connection.name.clone(), connection.description.clone()]
            }
        };

        Ok(Response::lines(lines))
    }

    fn use_on<P>(&mut self, implement: &str, target: &str, prompter: &mut P) -> Result<Response>
    where
        P: Prompter + ?Sized,
    {
        let implement = implement.trim().to_lowercase();
        let target = target.trim().to_lowercase();

        let Some(tool) = self.player.inventory.iter().find(|p| p.matches(&implement)) else {
            return Ok(Response::say(format!(
                "You do not have a {implement} to use on the {target}."
            )));
        };
        let tool = tool.id;

        let scene = self.world.scene(self.current)?;
        let mut named_anything = false;
        let mut candidates: Vec<(EffectTarget, &str)> = Vec::new();

        for prop in scene.props.iter().chain(self.player.inventory.iter()) {
            if prop.matches(&target) {
                named_anything = true;
                if prop.reacts_to(tool) {
                    candidates.push((EffectTarget::Prop(prop.id), prop.disambiguating_name()));
                }
            }
        }
        for (direction, connection) in &scene.connections {
            if connection.matches(&target) {
                named_anything = true;
                if connection.reacts_to(tool) {
                    candidates.push((
                        EffectTarget::Connection(*direction),
                        connection.disambiguating_name(),
                    ));
                }
            }
        }

        if candidates.is_empty() {
            let line = if named_anything {
                format!("Using the {implement} on the {target} has no effect.")
            } else {
                format!("There is no {target} to use with the {implement}.")
            };
            return Ok(Response::say(line));
        }

        let names: Vec<&str> = candidates.iter().map(|(_, name)| *name).collect();
        let Some(choice) = choose(prompter, &target, &names)? else {
            return Ok(Response::say(format!(
                "There is no {target} to use with the {implement}."
            )));
        };
        let chosen = candidates[choice].0;

        let current = self.current;
        match apply_effect(&mut self.world, &mut self.player, current, chosen, tool)? {
            Some(resolution) => Ok(Response {
                lines: vec![resolution.narrative],
                events: resolution.events,
                ..Response::default()
            }),
            None => Ok(Response::say(format!(
                "Using the {implement} on the {target} has no effect."
            ))),
        }
    }

    fn exit<P>(&mut self, prompter: &mut P) -> Result<Response>
    where
        P: Prompter + ?Sized,
    {
        let quit = !self.config.confirm_exit || confirm(prompter, "Are you sure (Y/N)? ")?;
        Ok(Response {
            quit,
            ..Response::default()
        })
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Header line shown above each scene.
    pub fn header(&self) -> String {
        format!("{} | {} XP", self.config.title, self.player.experience)
    }

    /// Full description of the current scene, as shown on entering it.
    pub fn describe_scene(&self) -> Result<Vec<String>> {
        let scene = self.current_scene()?;
        let mut lines = vec![scene.name.clone(), String::new(), scene.description.clone()];

        if !scene.props.is_empty() {
            lines.push(String::new());
            lines.push(format!("You see a {}.", join_names(&scene.props)));
        }

        if !scene.connections.is_empty() {
            let exits: Vec<_> = scene
                .connections
                .iter()
                .map(|(direction, c)| format!("a {} to the {}", c.name.to_lowercase(), direction))
                .collect();
            lines.push(String::new());
            lines.push(format!("There is {}.", exits.join(", ")));
        }

        Ok(lines)
    }

    // ========================================================================
    // State Queries
    // ========================================================================

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_scene_id(&self) -> SceneId {
        self.current
    }

    pub fn current_scene(&self) -> Result<&Scene> {
        self.world.scene(self.current)
    }

    pub fn experience(&self) -> u32 {
        self.player.experience
    }

    /// Get the most recent executed commands, oldest first.
    pub fn transcript(&self) -> &VecDeque<TranscriptEntry> {
        &self.transcript
    }
}
