use std::collections::BTreeMap;

use crate::{Galaxy, PlanetId};

/// Ships already spoken for this turn, per source planet.
///
/// `dispatched` ships left in an order this turn; `held` ships are kept back
/// for a deferred plan and never leave the local decision process.
#[derive(Debug, Clone, Default)]
pub struct Reservations {
    dispatched: BTreeMap<PlanetId, i32>,
    held: BTreeMap<PlanetId, i32>,
}

impl Reservations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, planet: PlanetId, ships: i32) {
        *self.dispatched.entry(planet).or_insert(0) += ships;
    }

    pub fn hold(&mut self, planet: PlanetId, ships: i32) {
        *self.held.entry(planet).or_insert(0) += ships;
    }

    pub fn dispatched(&self, planet: PlanetId) -> i32 {
        self.dispatched.get(&planet).copied().unwrap_or(0)
    }

    pub fn held(&self, planet: PlanetId) -> i32 {
        self.held.get(&planet).copied().unwrap_or(0)
    }

    pub fn committed(&self, planet: PlanetId) -> i32 {
        self.dispatched(planet) + self.held(planet)
    }

    pub fn total_held(&self) -> i32 {
        self.held.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dispatched.is_empty() && self.held.is_empty()
    }
}

/// Ships on `planet` that nothing has claimed yet this turn.
pub fn available_ships(galaxy: &Galaxy, reservations: &Reservations, planet: PlanetId) -> i32 {
    galaxy.planet(planet).ship_count - reservations.committed(planet)
}
