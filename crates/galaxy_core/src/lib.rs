//! `galaxy_core`: the turn snapshot and strength projections.
//!
//! No IO. Everything here is a pure read of one turn's state, apart from the
//! per-turn [`Reservations`] ledger.

mod galaxy;
pub mod projection;
mod reservations;
mod types;

pub use galaxy::Galaxy;
pub use projection::{
    effective_ship_count, incoming_pressure, nearest_threat_eta, net_own_growth,
    remaining_garrison, time_until_contested,
};
pub use reservations::{available_ships, Reservations};
pub use types::*;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;
