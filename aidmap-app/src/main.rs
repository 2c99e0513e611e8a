use aidmap::prelude::*;

/// Headless dashboard viewer: loads the data resources, assembles the
/// engine, and walks through the interactions a map surface would drive.
#[tokio::main]
async fn main() -> aidmap::Result<()> {
    env_logger::init();

    let token = std::env::var("AIDMAP_ACCESS_TOKEN")
        .unwrap_or_else(|_| "offline-demo-token".to_string());
    let data_dir = std::env::var("AIDMAP_DATA_DIR").unwrap_or_else(|_| ".".to_string());

    let mut dashboard = DashboardBuilder::new(DashboardConfig::new(token))
        .with_fetcher(Arc::new(FileFetcher::new(&data_dir)))
        .build()
        .await?;

    println!(
        "loaded {} projects across {} countries, {} boundary polygons",
        dashboard.store().len(),
        dashboard.aggregates().len(),
        dashboard.boundaries().len()
    );

    if dashboard.aggregates().is_empty() {
        println!("no countries available");
        return Ok(());
    }

    println!("\nfilter panel:");
    for entry in dashboard.filter().entries() {
        println!("  - {}", entry.label());
    }

    // Simulate the interactions a map surface would emit: hover a
    // boundary, then click it.
    let events = dashboard.event_sender();
    events.send(FeatureEvent::Enter {
        layer: FeatureLayer::Boundaries,
        id: 0,
    })?;
    events.send(FeatureEvent::Click {
        layer: FeatureLayer::Boundaries,
        id: 0,
    })?;
    dashboard.pump();

    if let Some(popup) = dashboard.router().active_popup() {
        println!("\npopup anchored at ({:.3}, {:.3}):", popup.anchor.lat, popup.anchor.lng);
        println!("{}", popup.html);
    } else {
        println!("\nno records match the first boundary polygon");
    }

    let derived = dashboard.derived_point_source()?;
    println!(
        "\nderived point source: {} bytes of GeoJSON for the aggregated layer",
        derived.len()
    );

    Ok(())
}
