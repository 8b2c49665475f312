//! zipfinder — smallest complete consumer of the zipnear engine.
//!
//! Loads an embedded GeoJSON extract (46 New York / Los Angeles area zip
//! codes), builds the catalog and spatial index once, and answers a single
//! radius query from the command line:
//!
//! ```text
//! zipfinder 10001 5
//! ```
//!
//! prints every code within 5 miles of 10001, nearest first, followed by
//! the clipboard-style code line.

use std::env;

use anyhow::{Context, Result, bail};

use zn_catalog::ZipCatalog;
use zn_search::{MAX_RADIUS_MILES, ZipSearch, zip_code_line};

// ── Embedded dataset ──────────────────────────────────────────────────────────

const DATASET: &str = include_str!("../data/zipcodes.geojson");
const DEFAULT_RADIUS_MILES: f64 = 5.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let code = args
        .next()
        .context("usage: zipfinder <zip-code> [radius-miles]")?;
    let radius_miles = match args.next() {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("radius {raw:?} is not a number"))?,
        None => DEFAULT_RADIUS_MILES,
    };

    let catalog = ZipCatalog::from_geojson_str(DATASET).context("loading embedded dataset")?;
    let search = ZipSearch::build(catalog);

    let Some(origin) = search.resolve(&code) else {
        bail!(
            "zip code {code:?} is not a five-digit code in the dataset \
             ({} codes loaded)",
            search.len()
        );
    };

    let mut neighbours = match search.try_find_within_radius(&code, radius_miles) {
        Ok(neighbours) => neighbours,
        Err(err) => bail!("{err} (accepted range: 0 < r ≤ {MAX_RADIUS_MILES})"),
    };
    neighbours.sort_by(|a, b| {
        let da = origin.position.distance_miles(a.position);
        let db = origin.position.distance_miles(b.position);
        da.total_cmp(&db)
    });

    let place = |f: &zn_catalog::ZipFeature| match (f.city(), f.state()) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        _ => String::new(),
    };

    println!(
        "{} neighbours within {radius_miles} miles of {} ({}):",
        neighbours.len(),
        origin.code,
        place(origin)
    );
    for feature in &neighbours {
        println!(
            "  {}  {:>5.2} mi  {}",
            feature.code,
            origin.position.distance_miles(feature.position),
            place(feature)
        );
    }
    println!();
    println!("codes: {}", zip_code_line(neighbours.iter().copied()));

    Ok(())
}
