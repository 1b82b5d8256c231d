//! Projections of planet strength net of fleets already in flight.
//!
//! Every function here is a pure read of the snapshot and the turn's
//! reservations. Raw ship counts mislead because pending arrivals settle
//! before any ship we order now can land.

use crate::{available_ships, Galaxy, PlanetId, PlayerId, Reservations};

/// Ships the planet will really have once every inbound rival fleet has landed.
///
/// With no rival fleet inbound this is just the unreserved ship count. Otherwise
/// the planet grows until the last rival arrival, loses each attacker plus one,
/// and gains our reinforcements that land no later than that. The projection
/// is only trusted when it predicts a loss: a result above the current count
/// is clamped back to the current count.
pub fn effective_ship_count(galaxy: &Galaxy, reservations: &Reservations, planet: PlanetId) -> i32 {
    let current = available_ships(galaxy, reservations, planet);
    let hostile = galaxy.hostile_fleets_to(planet);
    let Some(last) = hostile.last() else {
        return current;
    };
    let horizon = last.turns_remaining;
    let growth = i32::try_from(horizon)
        .unwrap_or(i32::MAX)
        .saturating_mul(galaxy.planet(planet).growth_rate);
    let fighters: i32 = hostile.iter().map(|f| f.ship_count + 1).sum();
    let reinforcements: i32 = galaxy
        .friendly_fleets_to(planet)
        .filter(|f| f.turns_remaining <= horizon)
        .map(|f| f.ship_count)
        .sum();
    let projected = current
        .saturating_add(growth)
        .saturating_sub(fighters)
        .saturating_add(reinforcements);
    projected.min(current)
}

/// Total rival ships inbound to `planet`.
pub fn incoming_pressure(galaxy: &Galaxy, planet: PlanetId) -> i32 {
    galaxy
        .hostile_fleets_to(planet)
        .iter()
        .map(|f| f.ship_count)
        .sum()
}

/// Turns until the first rival fleet lands on `planet`, if any is inbound.
pub fn nearest_threat_eta(galaxy: &Galaxy, planet: PlanetId) -> Option<u32> {
    galaxy
        .hostile_fleets_to(planet)
        .first()
        .map(|f| f.turns_remaining)
}

/// Time left before `planet` is contested; `None` when nothing hostile is inbound.
pub fn time_until_contested(galaxy: &Galaxy, planet: PlanetId) -> Option<u32> {
    nearest_threat_eta(galaxy, planet)
}

/// Combined growth of every planet `owner` holds.
pub fn net_own_growth(galaxy: &Galaxy, owner: PlayerId) -> i32 {
    galaxy
        .planets()
        .iter()
        .filter(|p| p.owner == owner)
        .map(|p| p.growth_rate)
        .sum()
}

/// Defenders an attacker still has to beat once our inbound fleets have landed.
pub fn remaining_garrison(galaxy: &Galaxy, planet: PlanetId) -> i32 {
    let already_sent: i32 = galaxy
        .friendly_fleets_to(planet)
        .map(|f| f.ship_count)
        .sum();
    galaxy.planet(planet).ship_count - already_sent
}
