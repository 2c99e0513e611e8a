//! Synthetic project-data generator.
//!
//! Writes a GeoJSON feature collection of plausible development-aid
//! projects so the dashboard can be exercised without real data:
//!
//! ```text
//! generate-data [count] [output-path]
//! ```
//!
//! Set `AIDMAP_SEED` for reproducible output.

use aidmap::{
    core::geo::LatLng,
    data::geojson::{Feature, FeatureCollection},
};
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::BTreeMap;

const COUNTRIES: [(&str, &str, f64, f64); 12] = [
    ("Kenya", "East Africa", 0.2, 37.9),
    ("Ethiopia", "East Africa", 9.1, 40.5),
    ("Uganda", "East Africa", 1.4, 32.3),
    ("Tanzania", "East Africa", -6.4, 34.9),
    ("South Sudan", "East Africa", 7.3, 30.2),
    ("Nigeria", "West Africa", 9.1, 8.7),
    ("Mali", "West Africa", 17.6, -4.0),
    ("Niger", "West Africa", 17.6, 8.1),
    ("Bangladesh", "South Asia", 23.7, 90.4),
    ("Afghanistan", "South Asia", 33.9, 67.7),
    ("Yemen", "Middle East", 15.6, 48.0),
    ("Jordan", "Middle East", 31.3, 36.4),
];

const SECTORS: [&str; 7] = [
    "Health",
    "Education",
    "Water & Sanitation",
    "Food Security",
    "Livelihoods",
    "Protection",
    "Shelter",
];

const PARTNERS: [&str; 8] = [
    "WHO",
    "UNICEF",
    "WFP",
    "UNHCR",
    "Save the Children",
    "Oxfam",
    "CARE International",
    "Mercy Corps",
];

const ACTIVITIES: [&str; 8] = [
    "Community Clinics",
    "School Rehabilitation",
    "Borehole Drilling",
    "Cash Transfers",
    "Vaccination Outreach",
    "Teacher Training",
    "Seed Distribution",
    "Hygiene Promotion",
];

const STATUSES: [&str; 4] = ["Active", "Paused", "Cancelled", "Completed"];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let count: usize = args
        .next()
        .map(|raw| raw.parse())
        .transpose()
        .context("invalid project count")?
        .unwrap_or(250);
    let output = args
        .next()
        .unwrap_or_else(|| "data/projects.geojson".to_string());

    let mut rng = match std::env::var("AIDMAP_SEED") {
        Ok(seed) => StdRng::seed_from_u64(seed.parse().context("invalid AIDMAP_SEED")?),
        Err(_) => StdRng::from_entropy(),
    };

    let features = (0..count).map(|_| synth_project(&mut rng)).collect();
    let collection = FeatureCollection { features };

    if let Some(parent) = std::path::Path::new(&output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output, serde_json::to_string_pretty(&collection)?)?;

    println!("wrote {} synthetic projects to {}", count, output);
    Ok(())
}

fn synth_project(rng: &mut StdRng) -> Feature {
    let (country, region, lat, lng) = COUNTRIES[rng.gen_range(0..COUNTRIES.len())];
    let sector = SECTORS[rng.gen_range(0..SECTORS.len())];
    let partner = PARTNERS[rng.gen_range(0..PARTNERS.len())];
    let activity = ACTIVITIES[rng.gen_range(0..ACTIVITIES.len())];

    // scatter around the country anchor so points don't stack
    let coordinates = LatLng::new(
        lat + rng.gen_range(-2.5..2.5),
        lng + rng.gen_range(-2.5..2.5),
    );

    let budget = rng.gen_range(50..5_000) * 1_000;
    let beneficiaries = rng.gen_range(100..200_000);

    let start_year = rng.gen_range(2020..=2024);
    let start_month = rng.gen_range(1..=12);
    let duration_years = rng.gen_range(1..=3);

    let mut properties = BTreeMap::new();
    let mut set = |key: &str, value: serde_json::Value| {
        properties.insert(key.to_string(), value);
    };
    set("Country", country.into());
    set("Region", region.into());
    set(
        "Project Name",
        format!("{} {}", country, activity).into(),
    );
    set("Sector", sector.into());
    set("Budget", budget.into());
    set("Beneficiaries", beneficiaries.into());
    set("Implementing Partner", partner.into());
    set("Status", STATUSES[rng.gen_range(0..STATUSES.len())].into());
    set(
        "Start Date",
        format!("{:04}-{:02}-01", start_year, start_month).into(),
    );
    set(
        "End Date",
        format!("{:04}-{:02}-28", start_year + duration_years, start_month).into(),
    );
    if rng.gen_bool(0.6) {
        set(
            "Description",
            format!("{} implemented by {} in {}", activity, partner, region).into(),
        );
    }

    drop(set);
    Feature::point(coordinates, properties)
}
