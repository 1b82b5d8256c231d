//! Wire format and config loading shared by the bot binary and its tests.

mod config;
mod wire;

pub use config::{apply_overrides, load_config, parse_override};
pub use wire::{format_order, parse_galaxy, TURN_MARKER};
