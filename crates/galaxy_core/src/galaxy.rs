use serde::{Deserialize, Serialize};

use crate::{Fleet, Planet, PlanetId, PlayerId};

/// One turn's view of the map: every planet and every fleet in flight.
///
/// Read-only once built. Ships the strategy sets aside during a turn are
/// tracked in [`crate::Reservations`], never written back here. Deserializing
/// runs the same checks as [`Galaxy::try_new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GalaxyRecord", into = "GalaxyRecord")]
pub struct Galaxy {
    planets: Vec<Planet>,
    my_fleets: Vec<Fleet>,
    enemy_fleets: Vec<Fleet>,
}

/// Serialized form: planets plus one flat fleet list.
#[derive(Serialize, Deserialize)]
struct GalaxyRecord {
    planets: Vec<Planet>,
    fleets: Vec<Fleet>,
}

impl From<Galaxy> for GalaxyRecord {
    fn from(galaxy: Galaxy) -> Self {
        let mut fleets = galaxy.my_fleets;
        fleets.extend(galaxy.enemy_fleets);
        Self {
            planets: galaxy.planets,
            fleets,
        }
    }
}

impl TryFrom<GalaxyRecord> for Galaxy {
    type Error = String;

    fn try_from(record: GalaxyRecord) -> Result<Self, Self::Error> {
        Galaxy::try_new(record.planets, record.fleets)
    }
}

impl Galaxy {
    /// Builds a snapshot, panicking if planet ids don't match their index or a
    /// fleet points at a planet that doesn't exist.
    pub fn new(planets: Vec<Planet>, fleets: Vec<Fleet>) -> Self {
        Self::try_new(planets, fleets).unwrap_or_else(|msg| panic!("{msg}"))
    }

    /// Like [`Galaxy::new`], but reports a broken snapshot instead of panicking.
    pub fn try_new(planets: Vec<Planet>, fleets: Vec<Fleet>) -> Result<Self, String> {
        if let Some((index, planet)) = planets.iter().enumerate().find(|(i, p)| p.id.0 != *i) {
            return Err(format!("planet at index {index} carries id {}", planet.id));
        }
        if let Some(fleet) = fleets
            .iter()
            .find(|f| f.source.0 >= planets.len() || f.destination.0 >= planets.len())
        {
            return Err(format!(
                "fleet {} -> {} references an unknown planet ({} planets)",
                fleet.source,
                fleet.destination,
                planets.len(),
            ));
        }
        // Neutral fleets never exist in a real game; they are dropped.
        let (my_fleets, others): (Vec<Fleet>, Vec<Fleet>) =
            fleets.into_iter().partition(|f| f.owner.is_self());
        let enemy_fleets = others.into_iter().filter(|f| f.owner.is_rival()).collect();
        Ok(Self {
            planets,
            my_fleets,
            enemy_fleets,
        })
    }

    pub fn planet(&self, id: PlanetId) -> &Planet {
        &self.planets[id.0]
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(|p| p.owner.is_self())
    }

    pub fn enemy_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(|p| p.owner.is_rival())
    }

    pub fn neutral_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(|p| p.owner.is_neutral())
    }

    /// Neutral and rival planets, in id order.
    pub fn not_my_planets(&self) -> impl Iterator<Item = &Planet> + '_ {
        self.planets.iter().filter(|p| !p.owner.is_self())
    }

    pub fn my_fleets(&self) -> &[Fleet] {
        &self.my_fleets
    }

    pub fn enemy_fleets(&self) -> &[Fleet] {
        &self.enemy_fleets
    }

    /// Rival fleets heading for `planet`, soonest arrival first.
    pub fn hostile_fleets_to(&self, planet: PlanetId) -> Vec<&Fleet> {
        let mut inbound: Vec<&Fleet> = self
            .enemy_fleets
            .iter()
            .filter(|f| f.destination == planet)
            .collect();
        inbound.sort_by_key(|f| f.turns_remaining);
        inbound
    }

    /// Our own fleets heading for `planet`.
    pub fn friendly_fleets_to(&self, planet: PlanetId) -> impl Iterator<Item = &Fleet> + '_ {
        self.my_fleets.iter().filter(move |f| f.destination == planet)
    }

    /// Turns a fleet needs between two planets: Euclidean distance rounded up.
    #[allow(clippy::cast_possible_truncation)] // map coordinates are small
    pub fn distance(&self, a: PlanetId, b: PlanetId) -> u32 {
        let d = self
            .planet(a)
            .position
            .distance_to(&self.planet(b).position);
        d.ceil() as u32
    }

    /// Ships `player` holds on planets plus ships it has in flight.
    pub fn total_ships(&self, player: PlayerId) -> i32 {
        let on_planets: i32 = self
            .planets
            .iter()
            .filter(|p| p.owner == player)
            .map(|p| p.ship_count)
            .sum();
        let in_flight: i32 = self
            .my_fleets
            .iter()
            .chain(&self.enemy_fleets)
            .filter(|f| f.owner == player)
            .map(|f| f.ship_count)
            .sum();
        on_planets + in_flight
    }

    /// A player is alive while it owns at least one planet or fleet.
    pub fn is_alive(&self, player: PlayerId) -> bool {
        self.planets.iter().any(|p| p.owner == player)
            || self
                .my_fleets
                .iter()
                .chain(&self.enemy_fleets)
                .any(|f| f.owner == player)
    }
}
