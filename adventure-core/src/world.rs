//! Game world types.
//!
//! Contains the types for representing the adventure: scenes, the
//! connections between them, the props they hold, and the player.

use crate::effects::UseEffect;
use crate::error::{GameError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for props. Effect tables are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropId(pub Uuid);

impl PropId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PropId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub Uuid);

impl SceneId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SceneId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Directions
// ============================================================================

/// Compass directions a connection can lead in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Parse a direction, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" => Some(Direction::North),
            "east" => Some(Direction::East),
            "south" => Some(Direction::South),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Naming
// ============================================================================

/// Anything the player can refer to by name.
pub trait Named {
    fn name(&self) -> &str;

    /// Longer name shown when several things share the same name.
    fn disambiguating_name(&self) -> &str;

    /// Case-insensitive match against player input.
    fn matches(&self, input: &str) -> bool {
        self.name().to_lowercase() == input.trim().to_lowercase()
    }
}

/// Join lowercased names with ", " for sentences like "You see a key, sword."
pub fn join_names<'a, T, I>(items: I) -> String
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.name().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Props
// ============================================================================

/// A thing in the world that can be carried, inspected or used.
#[derive(Debug, Clone)]
pub struct Prop {
    pub id: PropId,
    pub name: String,
    pub disambiguating_name: String,
    pub description: String,
    /// Props held inside this one, released when it breaks.
    pub contents: Vec<Prop>,
    /// What is left behind when this prop breaks.
    pub breakage: Option<Box<Prop>>,
    /// Reactions keyed by the prop used on this one.
    pub effects: HashMap<PropId, UseEffect>,
}

impl Prop {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: PropId::new(),
            disambiguating_name: name.clone(),
            name,
            description: String::new(),
            contents: Vec::new(),
            breakage: None,
            effects: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_disambiguating_name(mut self, name: impl Into<String>) -> Self {
        self.disambiguating_name = name.into();
        self
    }

    pub fn with_contents(mut self, contents: Vec<Prop>) -> Self {
        self.contents = contents;
        self
    }

    pub fn with_breakage(mut self, replacement: Prop) -> Self {
        self.breakage = Some(Box::new(replacement));
        self
    }

    pub fn with_effect(mut self, implement: PropId, effect: UseEffect) -> Self {
        self.effects.insert(implement, effect);
        self
    }

    /// Whether using `implement` on this prop triggers an effect.
    pub fn reacts_to(&self, implement: PropId) -> bool {
        self.effects.contains_key(&implement)
    }

    /// Consume the prop and return what it leaves behind: its contents,
    /// then its breakage replacement.
    pub fn remains(self) -> Vec<Prop> {
        let mut remains = self.contents;
        if let Some(replacement) = self.breakage {
            remains.push(*replacement);
        }
        remains
    }
}

impl Named for Prop {
    fn name(&self) -> &str {
        &self.name
    }

    fn disambiguating_name(&self) -> &str {
        &self.disambiguating_name
    }
}

/// Index of the first prop in `props` matching `name`.
pub fn position_by_name(props: &[Prop], name: &str) -> Option<usize> {
    props.iter().position(|p| p.matches(name))
}

// ============================================================================
// Connections
// ============================================================================

/// A one-way passage from a scene to another scene.
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: ConnectionId,
    pub to: SceneId,
    pub name: String,
    pub disambiguating_name: String,
    pub description: String,
    pub locked: bool,
    /// Printed when the player tries to pass while locked.
    pub blocked_message: String,
    pub effects: HashMap<PropId, UseEffect>,
}

impl Connection {
    pub fn to(destination: SceneId) -> Self {
        Self {
            id: ConnectionId::new(),
            to: destination,
            name: "Passageway".to_string(),
            disambiguating_name: "Passageway".to_string(),
            description: String::new(),
            locked: false,
            blocked_message: String::new(),
            effects: HashMap::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>, disambiguating_name: impl Into<String>) -> Self {
        self.name = name.into();
        self.disambiguating_name = disambiguating_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Lock the connection; `message` is shown when the player tries to pass.
    pub fn locked(mut self, message: impl Into<String>) -> Self {
        self.locked = true;
        self.blocked_message = message.into();
        self
    }

    pub fn with_effect(mut self, implement: PropId, effect: UseEffect) -> Self {
        self.effects.insert(implement, effect);
        self
    }

    pub fn reacts_to(&self, implement: PropId) -> bool {
        self.effects.contains_key(&implement)
    }
}

impl Named for Connection {
    fn name(&self) -> &str {
        &self.name
    }

    fn disambiguating_name(&self) -> &str {
        &self.disambiguating_name
    }
}

// ============================================================================
// Scenes
// ============================================================================

/// A place in the world.
#[derive(Debug, Clone)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    pub description: String,
    pub props: Vec<Prop>,
    pub connections: BTreeMap<Direction, Connection>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SceneId::new(),
            name: name.into(),
            description: String::new(),
            props: Vec::new(),
            connections: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_props(mut self, props: Vec<Prop>) -> Self {
        self.props = props;
        self
    }

    pub fn with_connection(mut self, direction: Direction, connection: Connection) -> Self {
        self.connections.insert(direction, connection);
        self
    }

    pub fn connect(&mut self, direction: Direction, connection: Connection) {
        self.connections.insert(direction, connection);
    }
}

// ============================================================================
// Player
// ============================================================================

/// The player: what they carry and what they have earned.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub inventory: Vec<Prop>,
    pub experience: u32,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the player carries a prop with this id.
    pub fn carries(&self, id: PropId) -> bool {
        self.inventory.iter().any(|p| p.id == id)
    }
}

// ============================================================================
// World
// ============================================================================

/// All scenes of the adventure and where the player starts.
#[derive(Debug, Clone)]
pub struct World {
    pub scenes: HashMap<SceneId, Scene>,
    pub start: SceneId,
}

impl World {
    pub fn new(start: SceneId) -> Self {
        Self {
            scenes: HashMap::new(),
            start,
        }
    }

    pub fn add_scene(&mut self, scene: Scene) -> SceneId {
        let id = scene.id;
        self.scenes.insert(id, scene);
        id
    }

    pub fn scene(&self, id: SceneId) -> Result<&Scene> {
        self.scenes.get(&id).ok_or(GameError::UnknownScene(id))
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Result<&mut Scene> {
        self.scenes.get_mut(&id).ok_or(GameError::UnknownScene(id))
    }

    /// Check that the start scene exists and every connection leads somewhere.
    pub fn validate(&self) -> Result<()> {
        if !self.scenes.contains_key(&self.start) {
            return Err(GameError::InvalidWorld(format!(
                "starting scene {} is not part of the world",
                self.start
            )));
        }

        for scene in self.scenes.values() {
            for (direction, connection) in &scene.connections {
                if !self.scenes.contains_key(&connection.to) {
                    return Err(GameError::InvalidWorld(format!(
                        "{} to the {} of '{}' leads to unknown scene {}",
                        connection.name, direction, scene.name, connection.to
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("north"), Some(Direction::North));
        assert_eq!(Direction::parse("  WeSt "), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::South.to_string(), "south");
    }

    #[test]
    fn test_name_matching_ignores_case() {
        let prop = Prop::new("Pile of Bones");
        assert!(prop.matches("pile of bones"));
        assert!(prop.matches("PILE OF BONES "));
        assert!(!prop.matches("pile"));
    }

    #[test]
    fn test_disambiguating_name_defaults_to_name() {
        let prop = Prop::new("Key");
        assert_eq!(prop.disambiguating_name(), "Key");

        let prop = Prop::new("Key").with_disambiguating_name("Golden Key");
        assert_eq!(prop.disambiguating_name(), "Golden Key");
    }

    #[test]
    fn test_remains_without_breakage() {
        let key = Prop::new("Key");
        let chest = Prop::new("Chest").with_contents(vec![key]);

        let remains = chest.remains();
        assert_eq!(remains.len(), 1);
        assert_eq!(remains[0].name, "Key");
    }

    #[test]
    fn test_remains_with_breakage_comes_last() {
        let skeleton = Prop::new("Skeleton")
            .with_contents(vec![Prop::new("Key")])
            .with_breakage(Prop::new("Pile of Bones"));

        let names: Vec<_> = skeleton.remains().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Key", "Pile of Bones"]);
    }

    #[test]
    fn test_join_names() {
        let props = vec![Prop::new("Longsword"), Prop::new("Pile of Bones")];
        assert_eq!(join_names(&props), "longsword, pile of bones");

        let empty: Vec<Prop> = Vec::new();
        assert_eq!(join_names(&empty), "");
    }

    #[test]
    fn test_connection_defaults() {
        let conn = Connection::to(SceneId::new());
        assert_eq!(conn.name, "Passageway");
        assert_eq!(conn.disambiguating_name, "Passageway");
        assert!(!conn.locked);

        let conn = conn.locked("It will not budge.");
        assert!(conn.locked);
        assert_eq!(conn.blocked_message, "It will not budge.");
    }

    #[test]
    fn test_scene_connections_listed_in_compass_order() {
        let other = SceneId::new();
        let scene = Scene::new("Hall")
            .with_connection(Direction::West, Connection::to(other))
            .with_connection(Direction::North, Connection::to(other))
            .with_connection(Direction::South, Connection::to(other));

        let order: Vec<_> = scene.connections.keys().copied().collect();
        assert_eq!(order, vec![Direction::North, Direction::South, Direction::West]);
    }

    #[test]
    fn test_validate_accepts_linked_world() {
        let hall = Scene::new("Hall");
        let mut cellar = Scene::new("Cellar");
        cellar.connect(Direction::North, Connection::to(hall.id));
        let hall = hall.with_connection(Direction::South, Connection::to(cellar.id));

        let mut world = World::new(hall.id);
        world.add_scene(hall);
        world.add_scene(cellar);
        assert!(world.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_start() {
        let world = World::new(SceneId::new());
        assert!(matches!(world.validate(), Err(GameError::InvalidWorld(_))));
    }

    #[test]
    fn test_validate_rejects_dangling_connection() {
        let hall = Scene::new("Hall").with_connection(Direction::East, Connection::to(SceneId::new()));
        let mut world = World::new(hall.id);
        world.add_scene(hall);

        match world.validate() {
            Err(GameError::InvalidWorld(msg)) => assert!(msg.contains("east of 'Hall'")),
            other => panic!("expected InvalidWorld, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_scene_lookup() {
        let world = World::new(SceneId::new());
        let missing = SceneId::new();
        assert!(matches!(world.scene(missing), Err(GameError::UnknownScene(id)) if id == missing));
    }

    #[test]
    fn test_player_carries() {
        let mut player = Player::new();
        let key = Prop::new("Key");
        let key_id = key.id;
        assert!(!player.carries(key_id));

        player.inventory.push(key);
        assert!(player.carries(key_id));
        assert_eq!(player.experience, 0);
    }
}
