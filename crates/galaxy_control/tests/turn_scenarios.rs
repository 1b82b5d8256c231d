//! Whole-turn scenarios and seeded invariant sweeps.
//!
//! These run the assembler and resolver together the way the bot does, and
//! check the guarantees every turn must keep: no target claimed twice and no
//! source ordered to send more ships than it holds.

use std::collections::{BTreeMap, HashSet};

use galaxy_control::{
    assembler, resolver, ActionKind, DefensiveStrategy, StrategyConfig, TurnStrategy,
};
use galaxy_core::test_fixtures::{fleet, make_rng, planet, random_galaxy};
use galaxy_core::{Galaxy, Order, PlanetId, Reservations};

fn play(galaxy: &Galaxy, config: StrategyConfig, turn: u32) -> Vec<Order> {
    let mut orders: Vec<Order> = Vec::new();
    DefensiveStrategy::new(config).play_turn(galaxy, turn, &mut orders);
    orders
}

#[test]
fn captures_a_nearby_neutral() {
    let galaxy = Galaxy::new(
        vec![planet(0, 1, 50, 5, 0.0, 0.0), planet(1, 0, 10, 3, 2.0, 0.0)],
        vec![],
    );
    let orders = play(&galaxy, StrategyConfig::default(), 0);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].source, PlanetId(0));
    assert_eq!(orders[0].destination, PlanetId(1));
    assert!(orders[0].ships >= 12);
}

#[test]
fn one_planet_each_and_no_fleets_means_no_orders() {
    let galaxy = Galaxy::new(
        vec![
            planet(0, 1, 100, 5, 0.0, 0.0),
            planet(1, 2, 100, 5, 20.0, 20.0),
            planet(2, 0, 3, 2, 2.0, 2.0),
            planet(3, 0, 3, 2, 18.0, 18.0),
        ],
        vec![],
    );
    assert!(play(&galaxy, StrategyConfig::default(), 0).is_empty());
}

#[test]
fn defense_beats_a_worse_offensive_plan() {
    // Planet 0 falls next turn: 5 + 5 - 25 = -15.
    let galaxy = Galaxy::new(
        vec![
            planet(0, 1, 5, 5, 0.0, 0.0),
            planet(1, 1, 20, 1, 1.0, 0.0),
            planet(2, 1, 25, 1, 0.0, 1.0),
            planet(3, 2, 50, 5, 20.0, 0.0),
            planet(4, 0, 30, 1, 3.0, 0.0),
        ],
        vec![fleet(2, 24, 3, 0, 20, 1)],
    );
    let reservations = Reservations::new();
    let config = StrategyConfig::default();
    let candidates = assembler::assemble_candidates(&galaxy, &reservations, &config, 0);
    assert!(candidates
        .iter()
        .any(|a| a.kind == ActionKind::Offense && a.target == PlanetId(4)));

    let mut reservations = reservations;
    let mut orders: Vec<Order> = Vec::new();
    let accepted = resolver::resolve(&galaxy, &mut reservations, candidates, &mut orders);

    assert_eq!(accepted[0].kind, ActionKind::Defense);
    assert_eq!(accepted[0].target, PlanetId(0));
    assert_eq!(accepted[0].total_ships(), 15);
    assert_eq!(orders, vec![Order {
        source: PlanetId(1),
        destination: PlanetId(0),
        ships: 15,
    }]);
}

#[test]
fn later_tick_plan_for_the_same_target_is_discarded() {
    let galaxy = Galaxy::new(
        vec![
            planet(0, 1, 100, 5, 0.0, 0.0),
            planet(1, 2, 10, 2, 3.0, 0.0),
            planet(2, 1, 3, 1, 0.0, 30.0),
        ],
        vec![],
    );
    let config = StrategyConfig {
        attack_rival_planets: true,
        ..StrategyConfig::default()
    };
    let candidates =
        assembler::assemble_candidates(&galaxy, &Reservations::new(), &config, 0);
    let for_rival: Vec<bool> = candidates
        .iter()
        .filter(|a| a.target == PlanetId(1))
        .map(|a| a.deferred)
        .collect();
    assert_eq!(for_rival, vec![false, true, true]);

    let mut orders: Vec<Order> = Vec::new();
    let summary = DefensiveStrategy::new(config).play_turn(&galaxy, 0, &mut orders);
    assert_eq!(summary.candidates, 3);
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.held_ships, 0);
    assert_eq!(orders, vec![Order {
        source: PlanetId(0),
        destination: PlanetId(1),
        ships: 18,
    }]);
}

#[test]
fn random_turns_never_share_a_destination() {
    for seed in 0..300 {
        let galaxy = random_galaxy(&mut make_rng(seed));
        let config = StrategyConfig {
            attack_rival_planets: seed % 2 == 0,
            ..StrategyConfig::default()
        };
        let mut reservations = Reservations::new();
        let candidates = assembler::assemble_candidates(&galaxy, &reservations, &config, 10);
        let mut orders: Vec<Order> = Vec::new();
        let accepted = resolver::resolve(&galaxy, &mut reservations, candidates, &mut orders);

        let mut targets = HashSet::new();
        for action in &accepted {
            assert!(
                targets.insert(action.target),
                "seed {seed}: planet {} claimed twice",
                action.target,
            );
        }
    }
}

#[test]
fn random_turns_never_overdraw_a_source() {
    for seed in 0..300 {
        let galaxy = random_galaxy(&mut make_rng(seed));
        let orders = play(&galaxy, StrategyConfig::default(), 3);

        let mut sent: BTreeMap<PlanetId, i32> = BTreeMap::new();
        for order in &orders {
            let source = galaxy.planet(order.source);
            assert!(source.owner.is_self(), "seed {seed}: order from a foreign planet");
            assert_ne!(order.source, order.destination);
            assert!(order.ships > 0, "seed {seed}: empty order");
            let before = sent.entry(order.source).or_insert(0);
            assert!(
                source.ship_count - *before > order.ships,
                "seed {seed}: planet {} ordered {} with {} left",
                order.source,
                order.ships,
                source.ship_count - *before,
            );
            *before += order.ships;
        }
    }
}

#[test]
fn turns_are_deterministic() {
    for seed in 0..50 {
        let galaxy = random_galaxy(&mut make_rng(seed));
        let first = play(&galaxy, StrategyConfig::default(), 7);
        let second = play(&galaxy, StrategyConfig::default(), 7);
        assert_eq!(first, second, "seed {seed}");
    }
}
