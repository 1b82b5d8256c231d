//! `galaxy_control`: turn strategy for the Planet Wars bot.
//!
//! Each turn: project planet strength, assemble competing offensive and
//! defensive plans over a short lookahead, then greedily accept the best
//! plans that can still be funded.

mod action;
pub mod assembler;
mod config;
pub mod resolver;

pub use action::{Action, ActionKind, Move};
pub use config::StrategyConfig;

use galaxy_core::{net_own_growth, Galaxy, Order, PlayerId, Reservations};
use serde::Serialize;

/// Receives orders one at a time, in the order they are decided.
pub trait OrderSink {
    fn issue(&mut self, order: Order);
}

impl OrderSink for Vec<Order> {
    fn issue(&mut self, order: Order) {
        self.push(order);
    }
}

pub trait TurnStrategy {
    fn play_turn(
        &mut self,
        galaxy: &Galaxy,
        turn: u32,
        sink: &mut dyn OrderSink,
    ) -> TurnSummary;
}

/// What one turn decided, for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnSummary {
    pub candidates: usize,
    pub accepted: usize,
    pub orders: usize,
    pub held_ships: i32,
}

/// One live player's strength at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStanding {
    pub player: PlayerId,
    pub growth: i32,
    pub ships: i32,
}

/// Growth and ship totals for every player still in the game, by id.
pub fn standings(galaxy: &Galaxy) -> Vec<PlayerStanding> {
    let highest = galaxy
        .planets()
        .iter()
        .map(|p| p.owner.0)
        .chain(galaxy.my_fleets().iter().map(|f| f.owner.0))
        .chain(galaxy.enemy_fleets().iter().map(|f| f.owner.0))
        .max()
        .unwrap_or(0);
    (PlayerId::SELF.0..=highest)
        .map(PlayerId)
        .filter(|&player| galaxy.is_alive(player))
        .map(|player| PlayerStanding {
            player,
            growth: net_own_growth(galaxy, player),
            ships: galaxy.total_ships(player),
        })
        .collect()
}

/// Defends what it holds first, then expands into neutral space.
///
/// 1. Skip the turn in a one-planet-each stand-off with nothing in flight.
/// 2. Assemble offensive and defensive candidates for every lookahead tick.
/// 3. Resolve them greedily, best score first.
#[derive(Debug, Clone, Default)]
pub struct DefensiveStrategy {
    pub config: StrategyConfig,
}

impl DefensiveStrategy {
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }
}

/// One planet each and no rival fleet moving: any move only weakens us.
fn is_standoff(galaxy: &Galaxy) -> bool {
    galaxy.my_planets().count() == 1
        && galaxy.enemy_planets().count() == 1
        && galaxy.enemy_fleets().is_empty()
}

/// Counts orders on their way to the real sink.
struct CountingSink<'a> {
    inner: &'a mut dyn OrderSink,
    issued: usize,
}

impl OrderSink for CountingSink<'_> {
    fn issue(&mut self, order: Order) {
        self.issued += 1;
        self.inner.issue(order);
    }
}

impl TurnStrategy for DefensiveStrategy {
    fn play_turn(
        &mut self,
        galaxy: &Galaxy,
        turn: u32,
        sink: &mut dyn OrderSink,
    ) -> TurnSummary {
        for standing in standings(galaxy) {
            tracing::debug!(
                turn,
                player = %standing.player,
                growth = standing.growth,
                ships = standing.ships,
                "player standing"
            );
        }
        if is_standoff(galaxy) {
            tracing::debug!(turn, "stand-off, holding position");
            return TurnSummary::default();
        }

        let mut reservations = Reservations::new();
        let candidates = assembler::assemble_candidates(galaxy, &reservations, &self.config, turn);
        let candidate_count = candidates.len();

        let mut counting = CountingSink {
            inner: sink,
            issued: 0,
        };
        let accepted = resolver::resolve(galaxy, &mut reservations, candidates, &mut counting);

        let summary = TurnSummary {
            candidates: candidate_count,
            accepted: accepted.len(),
            orders: counting.issued,
            held_ships: reservations.total_held(),
        };
        tracing::debug!(turn, ?summary, "turn decided");
        summary
    }
}
