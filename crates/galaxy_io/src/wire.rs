use anyhow::{anyhow, bail, Context, Result};
use galaxy_core::{Fleet, Galaxy, Order, Planet, PlanetId, PlayerId, Position};

/// Line that ends a turn in both directions.
pub const TURN_MARKER: &str = "go";

/// Parses one turn's game state.
///
/// `P x y owner ships growth` lines declare planets, numbered from 0 in order
/// of appearance; `F owner ships source destination total remaining` lines
/// declare fleets. `#` starts a comment.
pub fn parse_galaxy(text: &str) -> Result<Galaxy> {
    let mut planets = Vec::new();
    let mut fleets = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first().copied() {
            None => {}
            Some("P") => {
                let planet = parse_planet(&tokens[1..], planets.len())
                    .with_context(|| format!("line {line_no}: bad planet '{line}'"))?;
                planets.push(planet);
            }
            Some("F") => {
                let fleet = parse_fleet(&tokens[1..])
                    .with_context(|| format!("line {line_no}: bad fleet '{line}'"))?;
                fleets.push((line_no, fleet));
            }
            Some(other) => bail!("line {line_no}: unknown record type '{other}'"),
        }
    }

    // Fleets may precede the planets they name, so ends are checked last.
    for (line_no, fleet) in &fleets {
        for end in [fleet.source, fleet.destination] {
            if end.0 >= planets.len() {
                bail!(
                    "line {line_no}: fleet references planet {end} but only {} planets were declared",
                    planets.len()
                );
            }
        }
    }
    Ok(Galaxy::new(planets, fleets.into_iter().map(|(_, fleet)| fleet).collect()))
}

fn expect_fields(fields: &[&str], count: usize) -> Result<()> {
    if fields.len() != count {
        bail!("expected {count} fields, got {}", fields.len());
    }
    Ok(())
}

fn number<T: std::str::FromStr>(field: &str, name: &str) -> Result<T> {
    field
        .parse()
        .map_err(|_| anyhow!("{name}: '{field}' is not a valid number"))
}

/// A ship, growth or turn count: a non-negative number that fits an `i32`.
fn count(field: &str, name: &str) -> Result<i32> {
    let value: i32 = number(field, name)?;
    if value < 0 {
        bail!("{name}: '{field}' must not be negative");
    }
    Ok(value)
}

fn coordinate(field: &str, name: &str) -> Result<f64> {
    let value: f64 = number(field, name)?;
    if !value.is_finite() {
        bail!("{name}: '{field}' is not a finite coordinate");
    }
    Ok(value)
}

fn parse_planet(f: &[&str], id: usize) -> Result<Planet> {
    expect_fields(f, 5)?;
    Ok(Planet {
        id: PlanetId(id),
        position: Position {
            x: coordinate(f[0], "x")?,
            y: coordinate(f[1], "y")?,
        },
        owner: PlayerId(number(f[2], "owner")?),
        ship_count: count(f[3], "ships")?,
        growth_rate: count(f[4], "growth")?,
    })
}

fn parse_fleet(f: &[&str]) -> Result<Fleet> {
    expect_fields(f, 6)?;
    let total_trip_length = count(f[4], "total trip length")?.unsigned_abs();
    let turns_remaining = count(f[5], "turns remaining")?.unsigned_abs();
    if turns_remaining > total_trip_length {
        bail!("turns remaining {turns_remaining} exceeds trip length {total_trip_length}");
    }
    Ok(Fleet {
        owner: PlayerId(number(f[0], "owner")?),
        ship_count: count(f[1], "ships")?,
        source: PlanetId(number(f[2], "source")?),
        destination: PlanetId(number(f[3], "destination")?),
        total_trip_length,
        turns_remaining,
    })
}

/// Renders an order the way the game engine reads it: `source destination ships`.
pub fn format_order(order: &Order) -> String {
    format!("{} {} {}", order.source, order.destination, order.ships)
}
