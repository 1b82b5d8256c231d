use galaxy_core::{effective_ship_count, Galaxy, PlanetId, Reservations};
use serde::Serialize;

/// One source planet's contribution to an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub source: PlanetId,
    pub ships: i32,
    /// Turns from `source` to the action's target.
    pub distance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionKind {
    Offense,
    Defense,
}

/// A candidate plan: several sources sending ships to one target planet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub kind: ActionKind,
    pub target: PlanetId,
    /// Scoring weight, normally the target's growth rate.
    pub growth_rate: i32,
    /// Reserve the ships now and send them on a later turn.
    pub deferred: bool,
    pub moves: Vec<Move>,
}

impl Action {
    pub fn new(kind: ActionKind, target: PlanetId, growth_rate: i32, deferred: bool) -> Self {
        Self {
            kind,
            target,
            growth_rate,
            deferred,
            moves: Vec::new(),
        }
    }

    pub fn total_ships(&self) -> i32 {
        self.moves.iter().map(|m| m.ships).sum()
    }

    pub fn max_distance(&self) -> u32 {
        self.moves.iter().map(|m| m.distance).max().unwrap_or(0)
    }

    /// Turns until the plan pays for itself; lower is better.
    pub fn investment_score(&self) -> i32 {
        self.max_distance() as i32
            + i32::from(self.deferred)
            + self.total_ships() / self.growth_rate.max(1)
    }

    /// Sort key for resolution: cheap, fast plans on high-growth targets first.
    pub fn priority(&self) -> f64 {
        f64::from(self.investment_score()) / f64::from(self.growth_rate + 1)
    }

    /// Whether every source can still pay its share, counting one turn of
    /// growth for deferred plans. Plans are all-or-nothing.
    pub fn is_fundable(&self, galaxy: &Galaxy, reservations: &Reservations) -> bool {
        self.moves.iter().all(|m| {
            let mut have = effective_ship_count(galaxy, reservations, m.source);
            if self.deferred {
                have += galaxy.planet(m.source).growth_rate;
            }
            have > m.ships
        })
    }
}
