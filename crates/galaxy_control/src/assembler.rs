//! Candidate generation: one offensive or defensive plan per planet per
//! lookahead tick.

use galaxy_core::{
    available_ships, effective_ship_count, incoming_pressure, nearest_threat_eta,
    remaining_garrison, time_until_contested, Galaxy, Planet, PlanetId, Reservations,
};

use crate::{Action, ActionKind, Move, StrategyConfig};

/// Builds the full candidate pool for this turn across every lookahead tick.
///
/// Tick 0 plans dispatch immediately; later ticks reserve ships now and count
/// the sources' growth over the wait.
pub fn assemble_candidates(
    galaxy: &Galaxy,
    reservations: &Reservations,
    config: &StrategyConfig,
    turn: u32,
) -> Vec<Action> {
    let mut candidates = Vec::new();
    for tick in 0..config.lookahead_ticks {
        let before = candidates.len();
        for target in galaxy.not_my_planets() {
            candidates.extend(offensive_action(galaxy, reservations, config, turn, tick, target));
        }
        let offensive = candidates.len() - before;
        for planet in galaxy.my_planets() {
            candidates.extend(defensive_action(galaxy, reservations, config, tick, planet));
        }
        tracing::trace!(
            tick,
            offensive,
            defensive = candidates.len() - before - offensive,
            "assembled candidates"
        );
    }
    candidates
}

/// Our planets ordered by distance to `target`, nearest first; ties keep id order.
pub fn neighbors_by_distance(galaxy: &Galaxy, target: PlanetId) -> Vec<&Planet> {
    let mut neighbors: Vec<&Planet> = galaxy.my_planets().collect();
    neighbors.sort_by_key(|p| galaxy.distance(p.id, target));
    neighbors
}

/// Ships `source` can offer after waiting `tick` turns.
fn projected_stock(galaxy: &Galaxy, reservations: &Reservations, source: &Planet, tick: u32) -> i32 {
    effective_ship_count(galaxy, reservations, source.id) + tick as i32 * source.growth_rate
}

/// Extra ships a neutral target needs because a rival fleet is also heading
/// for it, discounted by the target's growth before that fleet lands.
fn contested_surcharge(galaxy: &Galaxy, target: &Planet, tick: u32) -> i32 {
    let pressure = incoming_pressure(galaxy, target.id);
    let Some(eta) = nearest_threat_eta(galaxy, target.id) else {
        return 0;
    };
    let wait = i32::try_from(eta).unwrap_or(i32::MAX).saturating_sub(tick as i32);
    pressure.saturating_sub(target.growth_rate.saturating_mul(wait))
}

/// Running totals while sources are added to an attack.
struct Bid {
    required: i32,
    /// Unspent travel bonus plus any overshoot; positive marks a long-shot strike.
    offense: i32,
}

fn offensive_action(
    galaxy: &Galaxy,
    reservations: &Reservations,
    config: &StrategyConfig,
    turn: u32,
    tick: u32,
    target: &Planet,
) -> Option<Action> {
    let rival = target.owner.is_rival();
    let mut bid = Bid {
        required: remaining_garrison(galaxy, target.id) + config.safety_margin,
        offense: 0,
    };
    // Our fleets already in flight will take it.
    if rival && bid.required <= config.safety_margin {
        return None;
    }
    if rival && !config.attack_rival_planets {
        return None;
    }
    if target.owner.is_neutral() {
        bid.required += contested_surcharge(galaxy, target, tick);
    }

    let mut action = Action::new(ActionKind::Offense, target.id, target.growth_rate, tick > 0);
    for source in neighbors_by_distance(galaxy, target.id) {
        let spare = projected_stock(galaxy, reservations, source, tick) - config.reserve_buffer;
        let distance = galaxy.distance(source.id, target.id);
        let mut ships = bid.required.min(spare);
        let mut travel_bonus = 0;
        if rival {
            let longest = action.max_distance();
            if distance > longest {
                travel_bonus = (distance - longest) as i32 * target.growth_rate;
                let extra = (spare - ships).min(travel_bonus);
                ships += extra;
                travel_bonus -= extra;
            }
        }
        if ships > 0 && ships >= bid.required.min(config.min_commitment) {
            if rival {
                bid.offense += travel_bonus;
            }
            action.moves.push(Move {
                source: source.id,
                ships,
                distance,
            });
            bid.required -= ships;
            if bid.required < 0 {
                bid.offense += bid.required;
            }
        }
        if bid.required <= 0 && bid.offense <= 0 {
            break;
        }
    }

    if bid.offense > 0 && action.max_distance() > turn + config.long_shot_horizon {
        action.moves.clear();
    }
    (!action.moves.is_empty() && bid.required <= 0).then_some(action)
}

fn defensive_action(
    galaxy: &Galaxy,
    reservations: &Reservations,
    config: &StrategyConfig,
    tick: u32,
    planet: &Planet,
) -> Option<Action> {
    let effective = effective_ship_count(galaxy, reservations, planet.id);
    if effective > 0 {
        return None;
    }
    let time_left = time_until_contested(galaxy, planet.id)?;
    let mut required = -effective;

    let mut action = Action::new(
        ActionKind::Defense,
        planet.id,
        planet.growth_rate * config.defense_growth_weight,
        tick > 0,
    );
    for helper in neighbors_by_distance(galaxy, planet.id) {
        if helper.id == planet.id {
            continue;
        }
        let distance = galaxy.distance(helper.id, planet.id);
        if distance > time_left
            || available_ships(galaxy, reservations, helper.id) < config.min_helper_garrison
        {
            continue;
        }
        let spare = projected_stock(galaxy, reservations, helper, tick) - config.reserve_buffer;
        let ships = required.min(spare);
        if ships > config.min_defense_contribution {
            action.moves.push(Move {
                source: helper.id,
                ships,
                distance,
            });
            required -= ships;
        }
        if required <= 0 {
            break;
        }
    }
    (!action.moves.is_empty() && required <= 0).then_some(action)
}
