//! Use effects and the events they produce.
//!
//! Using one prop on another looks up a `UseEffect` in the target's effect
//! table, keyed by the implement's id. An effect is plain data:
//! 1. A narrative line shown to the player
//! 2. A list of `EffectAction`s applied in order to the world and player
//!
//! Applying an effect yields `Event`s describing the state changes, so the
//! same pipeline can be checked in tests without scraping narrative text.
//! Effects are one-shot: firing one removes it from the target.

use crate::error::Result;
use crate::world::{ConnectionId, Direction, Player, Prop, PropId, SceneId, World};
use tracing::{info, warn};

/// A single state change performed by a use effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectAction {
    /// Add experience points to the player
    GainExperience(u32),

    /// Destroy the target prop, leaving its contents and breakage in the scene
    Break,

    /// Make the target connection passable
    Unlock,

    /// Make the target connection impassable
    Lock,
}

/// A scripted reaction to one prop being used on another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseEffect {
    pub narrative: String,
    pub actions: Vec<EffectAction>,
}

impl UseEffect {
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            actions: Vec::new(),
        }
    }

    pub fn gain_experience(mut self, amount: u32) -> Self {
        self.actions.push(EffectAction::GainExperience(amount));
        self
    }

    pub fn breaks_target(mut self) -> Self {
        self.actions.push(EffectAction::Break);
        self
    }

    pub fn unlocks_target(mut self) -> Self {
        self.actions.push(EffectAction::Unlock);
        self
    }

    pub fn locks_target(mut self) -> Self {
        self.actions.push(EffectAction::Lock);
        self
    }
}

/// What a use effect is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTarget {
    /// A prop lying in the current scene or carried by the player
    Prop(PropId),

    /// The connection leaving the current scene in this direction
    Connection(Direction),
}

/// Something that changed in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The player moved between scenes
    Moved { from: SceneId, to: SceneId },

    /// A prop went from the scene into the inventory
    PropTaken(PropId),

    /// A prop went from the inventory into the scene
    PropDropped(PropId),

    /// Experience was awarded
    ExperienceGained { amount: u32, total: u32 },

    /// A prop broke and released the listed props into the scene
    PropBroken { prop: PropId, released: Vec<PropId> },

    /// A connection became passable
    ConnectionUnlocked(ConnectionId),

    /// A connection became impassable
    ConnectionLocked(ConnectionId),
}

/// The outcome of firing a use effect.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub narrative: String,
    pub events: Vec<Event>,
}

/// Fire the effect `target` has for `implement`, if any.
///
/// `scene` is the scene the player stands in. Returns `None` when the target
/// has no effect for the implement (or no longer exists).
pub fn apply_effect(
    world: &mut World,
    player: &mut Player,
    scene: SceneId,
    target: EffectTarget,
    implement: PropId,
) -> Result<Option<Resolution>> {
    let Some(effect) = take_effect(world, player, scene, target, implement)? else {
        return Ok(None);
    };

    info!(?target, %implement, actions = effect.actions.len(), "use effect fired");

    let mut events = Vec::new();
    for action in &effect.actions {
        match (*action, target) {
            (EffectAction::GainExperience(amount), _) => {
                player.experience = player.experience.saturating_add(amount);
                events.push(Event::ExperienceGained {
                    amount,
                    total: player.experience,
                });
            }
            (EffectAction::Break, EffectTarget::Prop(prop_id)) => {
                let Some(prop) = remove_prop(world, player, scene, prop_id)? else {
                    warn!(%prop_id, "break skipped, prop is already gone");
                    continue;
                };
                let remains = prop.remains();
                let released = remains.iter().map(|p| p.id).collect();
                world.scene_mut(scene)?.props.extend(remains);
                events.push(Event::PropBroken {
                    prop: prop_id,
                    released,
                });
            }
            (EffectAction::Unlock, EffectTarget::Connection(direction)) => {
                if let Some(connection) = world.scene_mut(scene)?.connections.get_mut(&direction) {
                    connection.locked = false;
                    events.push(Event::ConnectionUnlocked(connection.id));
                }
            }
            (EffectAction::Lock, EffectTarget::Connection(direction)) => {
                if let Some(connection) = world.scene_mut(scene)?.connections.get_mut(&direction) {
                    connection.locked = true;
                    events.push(Event::ConnectionLocked(connection.id));
                }
            }
            (action, target) => {
                warn!(?action, ?target, "effect action does not apply to this target");
            }
        }
    }

    Ok(Some(Resolution {
        narrative: effect.narrative,
        events,
    }))
}

/// Remove and return the effect so it cannot fire twice.
fn take_effect(
    world: &mut World,
    player: &mut Player,
    scene: SceneId,
    target: EffectTarget,
    implement: PropId,
) -> Result<Option<UseEffect>> {
    let scene = world.scene_mut(scene)?;
    let effect = match target {
        EffectTarget::Prop(prop_id) => scene
            .props
            .iter_mut()
            .chain(player.inventory.iter_mut())
            .find(|p| p.id == prop_id)
            .and_then(|p| p.effects.remove(&implement)),
        EffectTarget::Connection(direction) => scene
            .connections
            .get_mut(&direction)
            .and_then(|c| c.effects.remove(&implement)),
    };
    Ok(effect)
}

/// Pull a prop out of the scene or the inventory, wherever it is.
fn remove_prop(
    world: &mut World,
    player: &mut Player,
    scene: SceneId,
    prop_id: PropId,
) -> Result<Option<Prop>> {
    let scene = world.scene_mut(scene)?;
    if let Some(index) = scene.props.iter().position(|p| p.id == prop_id) {
        return Ok(Some(scene.props.remove(index)));
    }
    if let Some(index) = player.inventory.iter().position(|p| p.id == prop_id) {
        return Ok(Some(player.inventory.remove(index)));
    }
    Ok(None)
}
