//! Shared test fixtures for galaxy_core and downstream crates.
//!
//! `planet()`/`fleet()` build records from bare numbers so scenarios stay
//! readable. `random_galaxy()` produces a seeded, valid snapshot for
//! invariant checks.

use crate::{Fleet, Galaxy, Planet, PlanetId, PlayerId, Position};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn planet(id: usize, owner: u32, ships: i32, growth: i32, x: f64, y: f64) -> Planet {
    Planet {
        id: PlanetId(id),
        owner: PlayerId(owner),
        ship_count: ships,
        growth_rate: growth,
        position: Position { x, y },
    }
}

pub fn fleet(
    owner: u32,
    ships: i32,
    source: usize,
    destination: usize,
    total_trip_length: u32,
    turns_remaining: u32,
) -> Fleet {
    Fleet {
        owner: PlayerId(owner),
        ship_count: ships,
        source: PlanetId(source),
        destination: PlanetId(destination),
        total_trip_length,
        turns_remaining,
    }
}

pub fn make_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random but well-formed galaxy: 6–20 planets on a 24×24 board, owners
/// drawn from neutral/self/two rivals, and up to 15 fleets in flight.
pub fn random_galaxy(rng: &mut impl Rng) -> Galaxy {
    let planet_count = rng.gen_range(6..=20);
    let planets: Vec<Planet> = (0..planet_count)
        .map(|id| {
            planet(
                id,
                rng.gen_range(0..=3),
                rng.gen_range(0..=100),
                rng.gen_range(0..=5),
                rng.gen_range(0.0..24.0),
                rng.gen_range(0.0..24.0),
            )
        })
        .collect();
    let fleet_count = rng.gen_range(0..=15);
    let fleets = (0..fleet_count)
        .map(|_| {
            let total = rng.gen_range(1..=20);
            fleet(
                rng.gen_range(1..=3),
                rng.gen_range(1..=60),
                rng.gen_range(0..planet_count),
                rng.gen_range(0..planet_count),
                total,
                rng.gen_range(1..=total),
            )
        })
        .collect();
    Galaxy::new(planets, fleets)
}
