//! The built-in adventure.
//!
//! Six scenes around a ruined banquet hall. The way out is a locked door
//! to the north of the hall; its key is held by a skeleton in the pantry,
//! and the skeleton only yields to the longsword hidden in the treasure
//! vault at the end of the magic passageway.

use crate::effects::UseEffect;
use crate::world::{Connection, Direction, Prop, Scene, World};

/// Build the adventure, starting in "The Beginning".
pub fn the_beginning() -> World {
    let longsword = Prop::new("Longsword").with_description(
        "Though worn by age, this sword has maintained enough of an edge to still be useful ... somewhat.",
    );
    let key = Prop::new("Key").with_description("A small, golden key.");
    let key_id = key.id;

    let skeleton = Prop::new("Skeleton")
        .with_description(
            "Seated on the ground and slumped against the wall, it can't be said whether this is the skeleton of a servant or a king.",
        )
        .with_contents(vec![key])
        .with_breakage(
            Prop::new("Pile of Bones").with_description("A pile of bones from the skeleton you slayed."),
        )
        .with_effect(
            longsword.id,
            UseEffect::new("The skeleton breaks apart as you strike it with your longsword.")
                .gain_experience(1)
                .breaks_target(),
        );

    let beginning = Scene::new("The Beginning").with_description("An empty room with stone walls.");
    let hall = Scene::new("A Large Hall").with_description(
        "Once the location of countless lavish feasts and celebrations, this grand hall has now deteriorated. Its windows are boarded and a thick layer of dust coats each of its surfaces.",
    );
    let pantry = Scene::new("Pantry")
        .with_description("The pantry is empty and cold.")
        .with_props(vec![skeleton]);
    let passageway = Scene::new("Magic Passageway")
        .with_description("You enter a long, narrow, dark passageway. You feel uneasy.");
    let vault = Scene::new("Treasure Vault")
        .with_description(
            "This small vault, hidden and guarded by magic, has rows upon rows of empty shelves.",
        )
        .with_props(vec![longsword]);
    let ending = Scene::new("The End").with_description("You survived!");

    let exit_door = Connection::to(ending.id)
        .named("Door", "Door to the North")
        .with_description("A large, ornate door.")
        .locked("You cannot open this door, it is locked.")
        .with_effect(
            key_id,
            UseEffect::new("You unlock the door with the key.")
                .unlocks_target()
                .gain_experience(1),
        );

    let beginning = beginning.with_connection(
        Direction::North,
        Connection::to(hall.id).named("Door", "Door to the North"),
    );
    let hall = hall
        .with_connection(
            Direction::South,
            Connection::to(passageway.id).named("Long Dark Passageway", "Passageway to the South"),
        )
        .with_connection(
            Direction::West,
            Connection::to(pantry.id).named("Door", "Door to the West"),
        )
        .with_connection(Direction::North, exit_door);
    let passageway = passageway
        .with_connection(
            Direction::South,
            Connection::to(beginning.id).named("Long Dark Passageway", "Passageway to the South"),
        )
        .with_connection(
            Direction::North,
            Connection::to(vault.id).named("Long Dark Passageway", "Passageway to the North"),
        );
    let vault = vault.with_connection(
        Direction::South,
        Connection::to(passageway.id).named("Door", "Door to the South"),
    );
    let pantry = pantry.with_connection(
        Direction::East,
        Connection::to(hall.id).named("Door", "Door to the East"),
    );
    let ending = ending.with_connection(
        Direction::South,
        Connection::to(hall.id).named("Door", "Door to the South"),
    );

    let mut world = World::new(beginning.id);
    for scene in [beginning, hall, pantry, passageway, vault, ending] {
        world.add_scene(scene);
    }
    world
}
