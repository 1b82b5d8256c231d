use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use galaxy_control::{DefensiveStrategy, OrderSink, StrategyConfig, TurnStrategy};
use galaxy_core::Order;
use galaxy_io::{
    apply_overrides, format_order, load_config, parse_galaxy, parse_override, TURN_MARKER,
};

#[derive(Parser)]
#[command(name = "galaxy_bot", about = "Planet Wars bot for the stdin/stdout engine protocol")]
struct Cli {
    /// JSON strategy config. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override one config key, e.g. `--set min_commitment=5`. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

fn build_config(cli: &Cli) -> Result<StrategyConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => StrategyConfig::default(),
    };
    let overrides = cli
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<BTreeMap<_, _>>>()?;
    apply_overrides(&mut config, &overrides)?;
    Ok(config)
}

/// Writes each order line as soon as it is decided. The first write error is
/// kept and reported once the turn is over.
struct LineSink<'a, W: Write> {
    out: &'a mut W,
    error: Option<std::io::Error>,
}

impl<W: Write> OrderSink for LineSink<'_, W> {
    fn issue(&mut self, order: Order) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{}", format_order(&order)) {
            self.error = Some(err);
        }
    }
}

fn play_one<W: Write>(
    state: &str,
    turn: u32,
    out: &mut W,
    strategy: &mut dyn TurnStrategy,
) -> Result<()> {
    let galaxy = match parse_galaxy(state) {
        Ok(galaxy) => galaxy,
        Err(err) => {
            tracing::error!(turn, "skipping turn: {err:#}");
            return Ok(());
        }
    };
    let mut sink = LineSink { out, error: None };
    let summary = strategy.play_turn(&galaxy, turn, &mut sink);
    if let Some(err) = sink.error {
        return Err(err).context("writing orders");
    }
    tracing::info!(
        turn,
        orders = summary.orders,
        held = summary.held_ships,
        "turn played"
    );
    Ok(())
}

/// Plays turns until `input` runs dry. Returns how many turns were answered.
fn run_bot<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    strategy: &mut dyn TurnStrategy,
) -> Result<u32> {
    let mut turn = 0u32;
    let mut state = String::new();
    for line in input.lines() {
        let line = line.context("reading game state")?;
        if !line.starts_with(TURN_MARKER) {
            state.push_str(&line);
            state.push('\n');
            continue;
        }
        play_one(&state, turn, out, strategy)?;
        writeln!(out, "{TURN_MARKER}").context("ending turn")?;
        out.flush().context("flushing orders")?;
        state.clear();
        turn += 1;
    }
    tracing::info!(turns = turn, "engine closed input");
    Ok(turn)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    tracing::debug!(?config, "starting bot");

    let mut strategy = DefensiveStrategy::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    run_bot(stdin.lock(), &mut stdout, &mut strategy)?;
    Ok(())
}
