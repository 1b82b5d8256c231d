use serde::{Deserialize, Serialize};

/// Tuning knobs for [`crate::DefensiveStrategy`].
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Ships a source always keeps at home.
    pub reserve_buffer: i32,
    /// Extra ships an attack brings beyond the projected garrison.
    pub safety_margin: i32,
    /// Smallest contribution a source may make to an attack, unless the
    /// remaining requirement is smaller still.
    pub min_commitment: i32,
    /// Number of lookahead ticks evaluated per turn (tick 0 dispatches now).
    pub lookahead_ticks: u32,
    /// Attacks carrying a travel bonus are dropped when their longest leg
    /// exceeds `turn + long_shot_horizon`.
    pub long_shot_horizon: u32,
    /// A defensive contribution must be strictly larger than this.
    pub min_defense_contribution: i32,
    /// Helpers holding fewer ships than this are never asked to defend.
    pub min_helper_garrison: i32,
    /// Multiplier applied to a defended planet's growth when scoring.
    pub defense_growth_weight: i32,
    /// Bid for planets already held by a rival. Off by default.
    pub attack_rival_planets: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            reserve_buffer: 2,
            safety_margin: 2,
            min_commitment: 7,
            lookahead_ticks: 3,
            long_shot_horizon: 5,
            min_defense_contribution: 3,
            min_helper_garrison: 4,
            defense_growth_weight: 2,
            attack_rival_planets: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: StrategyConfig =
            serde_json::from_str(r#"{ "min_commitment": 3, "attack_rival_planets": true }"#)
                .unwrap();
        assert_eq!(config.min_commitment, 3);
        assert!(config.attack_rival_planets);
        assert_eq!(config.reserve_buffer, 2);
        assert_eq!(config.lookahead_ticks, 3);
    }
}
