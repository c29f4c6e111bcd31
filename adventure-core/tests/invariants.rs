//! State invariants of the engine, checked against the built-in adventure
//! and small hand-built worlds.

use adventure_core::testing::{assert_experience, assert_scene};
use adventure_core::{Connection, Direction, Prop, Scene, TestHarness, UseEffect, World};

/// A room with two same-named coins, one in a jar, and a locked gate.
fn coin_room() -> World {
    let hammer = Prop::new("Hammer");
    let hammer_id = hammer.id;

    let garden = Scene::new("Garden").with_description("Overgrown.");
    let shed = Scene::new("Shed")
        .with_description("Dusty.")
        .with_props(vec![
            Prop::new("Coin").with_disambiguating_name("Copper Coin"),
            Prop::new("Coin").with_disambiguating_name("Silver Coin"),
            Prop::new("Jar")
                .with_contents(vec![Prop::new("Marble")])
                .with_breakage(Prop::new("Shards"))
                .with_effect(hammer_id, UseEffect::new("The jar shatters.").breaks_target()),
            hammer,
        ])
        .with_connection(
            Direction::North,
            Connection::to(garden.id)
                .named("Gate", "Garden Gate")
                .locked("The gate is rusted shut."),
        );

    let garden = garden.with_connection(Direction::South, Connection::to(shed.id));
    let mut world = World::new(shed.id);
    world.add_scene(shed);
    world.add_scene(garden);
    world
}

#[test]
fn test_locked_connection_never_moves_player() {
    let mut harness = TestHarness::with_world(coin_room());
    for _ in 0..3 {
        let response = harness.input("go north");
        assert!(!response.scene_changed);
        assert!(response.events.is_empty());
        assert_scene(&harness, "Shed");
    }
}

#[test]
fn test_take_and_drop_conserve_props() {
    let mut harness = TestHarness::new();
    let total = harness.loose_prop_count();

    harness.script(&["go north", "go south", "go north"]);
    for line in ["take longsword", "take longsword", "drop longsword", "drop longsword"] {
        harness.input(line);
        assert_eq!(harness.loose_prop_count(), total, "after '{line}'");
    }

    harness.input("take longsword");
    assert_eq!(harness.game.player().inventory.len(), 1);
    assert!(harness.game.current_scene().unwrap().props.is_empty());
}

#[test]
fn test_take_same_named_takes_first() {
    let mut harness = TestHarness::with_world(coin_room());
    harness.input("take coin");

    let inventory = &harness.game.player().inventory;
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].disambiguating_name, "Copper Coin");
    assert_eq!(harness.prompter.questions_asked(), 0);
}

#[test]
fn test_inspect_asks_across_scene_and_inventory() {
    let mut harness = TestHarness::with_world(coin_room());
    harness.input("take coin");
    harness.answer("1");

    harness.input("inspect coin");
    // Scene props are listed before the inventory.
    assert_eq!(harness.prompter.output()[1], "    0: Silver Coin");
    assert_eq!(harness.prompter.output()[2], "    1: Copper Coin");
}

#[test]
fn test_no_question_for_single_match() {
    let mut harness = TestHarness::with_world(coin_room());
    harness.input("inspect jar");
    harness.input("inspect gate");
    harness.input("inspect nothing");
    assert_eq!(harness.prompter.questions_asked(), 0);
}

#[test]
fn test_use_requires_implement_in_inventory() {
    let mut harness = TestHarness::with_world(coin_room());

    // The hammer is lying in the room, not carried.
    let response = harness.input("use hammer on jar");
    assert_eq!(
        response.lines,
        vec!["You do not have a hammer to use on the jar."]
    );
    assert!(harness.scene_has("jar"));

    harness.input("take hammer");
    let response = harness.input("use hammer on jar");
    assert_eq!(response.lines, vec!["The jar shatters."]);
    assert!(!harness.scene_has("jar"));
    assert!(harness.scene_has("marble"));
    assert!(harness.scene_has("shards"));
    assert_experience(&harness, 0);
}

#[test]
fn test_use_with_wrong_implement() {
    let mut harness = TestHarness::with_world(coin_room());
    harness.input("take coin");

    let response = harness.input("use coin on jar");
    assert_eq!(
        response.lines,
        vec!["Using the coin on the jar has no effect."]
    );
    assert!(response.events.is_empty());
    assert!(harness.scene_has("jar"));
}

#[test]
fn test_breaking_carried_prop_does_not_duplicate() {
    let mut harness = TestHarness::with_world(coin_room());
    harness.script(&["take hammer", "take jar"]);
    let before = harness.loose_prop_count();

    harness.input("use hammer on jar");
    // The jar is replaced by a marble and shards: one prop in, two out.
    assert_eq!(harness.loose_prop_count(), before + 1);
    assert!(!harness.carries("jar"));
    assert!(harness.scene_has("marble"));
}
