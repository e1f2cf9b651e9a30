use emlak::catalog::{CatalogSource, JsonFileSource, SeedSource};
use emlak::models::{Property, PropertyType};
use emlak::query::{query, Criteria, SortOrder};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Emlak - Listing Query Engine");
    info!("================================");

    // Catalog comes from a JSON file when a path is given, else seed data
    let catalog = match std::env::args().nth(1) {
        Some(path) => {
            let source = JsonFileSource::new(path);
            info!("Loading catalog from {} source...", source.source_name());
            source.load().await?
        }
        None => SeedSource.load().await?,
    };

    info!("Catalog holds {} listings", catalog.len());

    // Rent listings in catalog order
    let rents = query(
        catalog.as_slice(),
        &Criteria::default().with_kind(PropertyType::Rent),
    );
    print_results("Kiralık ilanlar", &rents);

    // Mid-range sale window, cheapest first
    let window = query(
        catalog.as_slice(),
        &Criteria::default()
            .with_price(Some(1_000_000), Some(2_000_000))
            .sorted_by(SortOrder::PriceAsc),
    );
    print_results("1M-2M ₺ aralığı (artan fiyat)", &window);

    // Free-text search
    let villas = query(catalog.as_slice(), &Criteria::default().with_search("villa"));
    print_results("\"villa\" araması", &villas);

    // Export the publicly visible catalog
    let active: Vec<&Property> = catalog.active();
    let json = serde_json::to_string_pretty(&active)?;
    tokio::fs::write("catalog_export.json", json).await?;
    info!("💾 Saved {} active listings to catalog_export.json", active.len());

    Ok(())
}

fn print_results(label: &str, results: &[&Property]) {
    println!("\n{label}: {} ilan", results.len());
    for (i, property) in results.iter().enumerate() {
        println!("{}. {} ({} ₺)", i + 1, property.title, property.price);
        println!("   {} · {} m² · {}", property.category, property.area, property.location);
        if let Some(bedrooms) = property.bedrooms {
            println!("   {} yatak odası", bedrooms);
        }
        println!("   ID: {}", property.id);
    }
}
