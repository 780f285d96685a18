//! tour: generate one walking path and print it as JSON.
//!
//! ```text
//! tour [places.csv] [budget_minutes]
//! ```
//!
//! Without a CSV the candidate pool is synthesised around Berlin Mitte from
//! a fixed seed.  The pool is capped to the nearest `POOL_SIZE` places
//! around the first candidate, which is also the start anchor.
//!
//! With the `osrm` feature and `STROLL_OSRM_URL` set, legs come from the
//! routing service instead of the haversine estimate.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use stroll_core::{
    load_places_csv, Coordinate, Geometry, LocatedPlace, Place, WalkConfig, WalkingPace,
};
use stroll_plan::{Constraints, PathGenerator, TimeBudget};
use stroll_route::CandidateIndex;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const SYNTHETIC_COUNT: usize = 40;
const POOL_SIZE:       usize = 8;
const DEFAULT_BUDGET:  u32   = 240;
const CENTER:          (f64, f64) = (52.5200, 13.4050); // (lat, lon)

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let places = match args.next() {
        Some(path) => load_places_csv(Path::new(&path))
            .with_context(|| format!("loading candidates from {path}"))?,
        None => synthetic_places(),
    };
    let budget_minutes = match args.next() {
        Some(s) => s.parse().context("budget_minutes must be a whole number")?,
        None => DEFAULT_BUDGET,
    };

    let config = WalkConfig::default();
    let Some(start) = places.first().map(|p| p.id.clone()) else {
        anyhow::bail!("no candidate places");
    };
    let pool = cap_pool(&places)?;

    // ── Budget ────────────────────────────────────────────────────────────
    let budget = TimeBudget::new(&config);
    let speed = WalkingPace::Sightseeing.speed_kmh(&config);
    let walking = budget.max_walking_minutes(budget_minutes, pool.len() as u32)?;
    let max_km = budget.max_distance_km(walking, speed);
    tracing::info!(
        budget_minutes,
        walking_minutes = walking,
        max_distance_km = max_km,
        suggested_places = budget.optimal_place_count(budget_minutes, max_km, speed)?,
        "budget"
    );

    let constraints = Constraints {
        start_place_id: Some(start),
        max_duration_minutes: Some(budget_minutes),
        max_distance_km: Some(max_km),
        ..Constraints::default()
    };

    let path = generate(config, &pool, &constraints)?;
    println!("{}", serde_json::to_string_pretty(&path)?);
    Ok(())
}

#[cfg(not(feature = "osrm"))]
fn generate(
    config: WalkConfig,
    pool: &[Place],
    constraints: &Constraints,
) -> Result<stroll_plan::GeneratedPath> {
    Ok(PathGenerator::pedestrian(config)?.generate(pool, constraints)?)
}

#[cfg(feature = "osrm")]
fn generate(
    config: WalkConfig,
    pool: &[Place],
    constraints: &Constraints,
) -> Result<stroll_plan::GeneratedPath> {
    use stroll_route::{AsyncRouteDistanceProvider, OsrmFootClient, OsrmFootClientParams};

    let Ok(url) = std::env::var("STROLL_OSRM_URL") else {
        return Ok(PathGenerator::pedestrian(config)?.generate(pool, constraints)?);
    };

    let points = pool
        .iter()
        .map(|p| p.locate().map(|l| l.coordinate))
        .collect::<Result<Vec<Coordinate>, _>>()?;

    let client = OsrmFootClient::new(OsrmFootClientParams::new(url));
    let matrix = tokio::runtime::Runtime::new()?.block_on(client.matrix(&points))?;

    Ok(PathGenerator::new(config, matrix).generate(pool, constraints)?)
}

/// The first candidate followed by the `POOL_SIZE - 1` others nearest to it.
fn cap_pool(places: &[Place]) -> Result<Vec<Place>> {
    let Some((first, rest)) = places.split_first() else {
        return Ok(Vec::new());
    };
    let origin = first.locate()?.coordinate;
    let located = rest
        .iter()
        .map(Place::locate)
        .collect::<Result<Vec<LocatedPlace>, _>>()?;

    let index = CandidateIndex::new(located);
    let nearest = index.k_nearest(origin, POOL_SIZE - 1).into_iter().map(|p| {
        let [lon, lat] = p.coordinate.lon_lat();
        Place::new(p.id.clone(), Geometry::point(lon, lat))
    });
    Ok(std::iter::once(first.clone()).chain(nearest).collect())
}

/// Scatter candidates within ~2 km of `CENTER`.
fn synthetic_places() -> Vec<Place> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..SYNTHETIC_COUNT)
        .map(|i| {
            let c = Coordinate::new(
                CENTER.0 + rng.gen_range(-0.018..0.018),
                CENTER.1 + rng.gen_range(-0.03..0.03),
            );
            Place::new(format!("poi-{i:02}"), Geometry::wkt(format!("POINT({} {})", c.longitude, c.latitude)))
        })
        .collect()
}
