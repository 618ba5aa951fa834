//! Mission system integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use war_mission::combat::resolve;
use war_mission::core::{ArmyColor, TerritoryId};
use war_mission::mission::{draw, Mission, Player, MISSION_COUNT};
use war_mission::territory::{Territory, TerritoryStore};

fn blue() -> ArmyColor {
    ArmyColor::new("Blue").unwrap()
}

/// Draws from one seeded generator should land on each id about a third of
/// the time.
#[test]
fn test_draw_is_roughly_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(20240601);
    let draws = 30_000;
    let mut counts = [0usize; MISSION_COUNT as usize];

    for _ in 0..draws {
        let id = draw(&mut rng);
        counts[usize::from(id) - 1] += 1;
    }

    let expected = draws / usize::from(MISSION_COUNT);
    for (i, &count) in counts.iter().enumerate() {
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 10,
            "mission {} drawn {count} times, expected about {expected}",
            i + 1
        );
    }
}

#[test]
fn test_draws_are_not_constant() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let first = draw(&mut rng);
    assert!((0..50).any(|_| draw(&mut rng) != first));
}

/// Player "Blue" holding exactly three conquered territories completes the
/// small conquest mission; two are not enough.
#[test]
fn test_conquest_threshold() {
    let three = TerritoryStore::from_territories(vec![
        Territory::new("Home", "Blue", 3).unwrap(),
        Territory::new("One", "Blue", 1).unwrap(),
        Territory::new("Two", "Blue", 1).unwrap(),
        Territory::new("Three", "Blue", 1).unwrap(),
        Territory::new("Rest", "Red", 1).unwrap(),
    ])
    .unwrap();
    let player = Player::with_home(blue(), vec![TerritoryId(0)]);
    let mission = Mission::from_id(2, ArmyColor::new("Red").unwrap()).unwrap();
    assert!(mission.is_fulfilled(&three, &player));

    let two = TerritoryStore::from_territories(vec![
        Territory::new("Home", "Blue", 3).unwrap(),
        Territory::new("One", "Blue", 1).unwrap(),
        Territory::new("Two", "Blue", 1).unwrap(),
        Territory::new("Three", "Red", 1).unwrap(),
        Territory::new("Rest", "Red", 1).unwrap(),
    ])
    .unwrap();
    assert!(!mission.is_fulfilled(&two, &player));
}

#[test]
fn test_conquests_tracked_through_combat() {
    let mut store = TerritoryStore::from_territories(vec![
        Territory::new("Home", "Blue", 10).unwrap(),
        Territory::new("North", "Red", 1).unwrap(),
        Territory::new("South", "Red", 1).unwrap(),
    ])
    .unwrap();
    let mut player = Player::new(blue());
    player.record_home(&store);

    let destroy_red = Mission::DestroyArmy { color: ArmyColor::new("Red").unwrap() };
    assert!(!destroy_red.is_fulfilled(&store, &player));

    resolve(&mut store, TerritoryId(0), TerritoryId(1), 6, 1).unwrap();
    assert_eq!(player.conquered(&store), 1);
    assert!(!destroy_red.is_fulfilled(&store, &player));

    resolve(&mut store, TerritoryId(0), TerritoryId(2), 6, 1).unwrap();
    assert_eq!(player.conquered(&store), 2);
    assert!(destroy_red.is_fulfilled(&store, &player));
}

#[test]
fn test_large_conquest_needs_five() {
    let store = TerritoryStore::from_territories(
        (0..6)
            .map(|i| Territory::new(&format!("T{i}"), "Blue", 1).unwrap())
            .collect(),
    )
    .unwrap();
    let mission = Mission::from_id(3, ArmyColor::new("Red").unwrap()).unwrap();

    let one_home = Player::with_home(blue(), vec![TerritoryId(0)]);
    assert!(mission.is_fulfilled(&store, &one_home));

    let two_home = Player::with_home(blue(), vec![TerritoryId(0), TerritoryId(1)]);
    assert!(!mission.is_fulfilled(&store, &two_home));
}
