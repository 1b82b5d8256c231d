//! Greedy conflict resolution over the candidate pool.

use std::collections::HashSet;

use galaxy_core::{Galaxy, Order, PlanetId, Reservations};

use crate::{Action, OrderSink};

/// Sorts candidates best-first by [`Action::priority`]. The sort is stable, so
/// equal scores keep generation order.
pub fn prioritize(candidates: &mut [Action]) {
    candidates.sort_by(|a, b| a.priority().total_cmp(&b.priority()));
}

/// Accepts candidates in priority order and returns the accepted ones.
///
/// A candidate is dropped when any source can no longer fund its share or when
/// an earlier candidate already claimed the same target. Immediate plans
/// issue their orders straight to `sink`; deferred plans only hold their
/// ships in `reservations`.
pub fn resolve(
    galaxy: &Galaxy,
    reservations: &mut Reservations,
    mut candidates: Vec<Action>,
    sink: &mut dyn OrderSink,
) -> Vec<Action> {
    prioritize(&mut candidates);
    let mut claimed: HashSet<PlanetId> = HashSet::new();
    let mut accepted = Vec::new();

    for action in candidates {
        if !action.is_fundable(galaxy, reservations) {
            tracing::trace!(planet = %action.target, "dropping unfundable plan");
            continue;
        }
        if claimed.contains(&action.target) {
            continue;
        }
        for m in &action.moves {
            if action.deferred {
                reservations.hold(m.source, m.ships);
            } else {
                reservations.dispatch(m.source, m.ships);
                sink.issue(Order {
                    source: m.source,
                    destination: action.target,
                    ships: m.ships,
                });
            }
        }
        tracing::debug!(
            kind = ?action.kind,
            planet = %action.target,
            ships = action.total_ships(),
            deferred = action.deferred,
            score = action.investment_score(),
            "accepted plan"
        );
        claimed.insert(action.target);
        accepted.push(action);
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActionKind, Move};
    use galaxy_core::test_fixtures::planet;

    fn galaxy() -> Galaxy {
        Galaxy::new(
            vec![
                planet(0, 1, 40, 2, 0.0, 0.0),
                planet(1, 1, 40, 2, 0.0, 5.0),
                planet(2, 0, 10, 3, 2.0, 0.0),
                planet(3, 0, 10, 1, 4.0, 0.0),
            ],
            vec![],
        )
    }

    fn plan(target: usize, growth: i32, deferred: bool, moves: &[(usize, i32, u32)]) -> Action {
        let mut action = Action::new(ActionKind::Offense, PlanetId(target), growth, deferred);
        action.moves = moves
            .iter()
            .map(|&(source, ships, distance)| Move {
                source: PlanetId(source),
                ships,
                distance,
            })
            .collect();
        action
    }

    #[test]
    fn best_score_goes_first() {
        let mut candidates = vec![
            plan(3, 1, false, &[(0, 12, 4)]),
            plan(2, 3, false, &[(0, 12, 2)]),
        ];
        prioritize(&mut candidates);
        assert_eq!(candidates[0].target, PlanetId(2));
    }

    #[test]
    fn one_plan_per_destination() {
        let galaxy = galaxy();
        let mut reservations = Reservations::new();
        let mut orders: Vec<Order> = Vec::new();
        let accepted = resolve(
            &galaxy,
            &mut reservations,
            vec![
                plan(2, 3, true, &[(1, 12, 6)]),
                plan(2, 3, false, &[(0, 12, 2)]),
            ],
            &mut orders,
        );
        assert_eq!(accepted.len(), 1);
        assert!(!accepted[0].deferred);
        assert_eq!(orders, vec![Order {
            source: PlanetId(0),
            destination: PlanetId(2),
            ships: 12,
        }]);
        assert_eq!(reservations.held(PlanetId(1)), 0);
    }

    #[test]
    fn deferred_plans_hold_ships_without_orders() {
        let galaxy = galaxy();
        let mut reservations = Reservations::new();
        let mut orders: Vec<Order> = Vec::new();
        resolve(
            &galaxy,
            &mut reservations,
            vec![plan(3, 1, true, &[(1, 15, 6)])],
            &mut orders,
        );
        assert!(orders.is_empty());
        assert_eq!(reservations.held(PlanetId(1)), 15);
        assert_eq!(galaxy.planet(PlanetId(1)).ship_count, 40);
    }

    #[test]
    fn shared_source_is_never_overdrawn() {
        let galaxy = galaxy();
        let mut reservations = Reservations::new();
        let mut orders: Vec<Order> = Vec::new();
        let accepted = resolve(
            &galaxy,
            &mut reservations,
            vec![
                plan(2, 3, false, &[(0, 25, 2)]),
                plan(3, 1, false, &[(0, 20, 4)]),
            ],
            &mut orders,
        );
        assert_eq!(accepted.len(), 1);
        assert_eq!(orders.len(), 1);
        assert_eq!(reservations.dispatched(PlanetId(0)), 25);
    }

    #[test]
    fn partially_fundable_plans_are_dropped_whole() {
        let galaxy = galaxy();
        let mut reservations = Reservations::new();
        reservations.hold(PlanetId(1), 35);
        let mut orders: Vec<Order> = Vec::new();
        let accepted = resolve(
            &galaxy,
            &mut reservations,
            vec![plan(2, 3, false, &[(0, 10, 2), (1, 10, 6)])],
            &mut orders,
        );
        assert!(accepted.is_empty());
        assert!(orders.is_empty());
        assert_eq!(reservations.dispatched(PlanetId(0)), 0);
    }
}
