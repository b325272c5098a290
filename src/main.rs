//! Gourmet demo runner.
//!
//! Loads the menu and stored preferences, then reports what the page would
//! render: visible dishes for the saved filter and the reservations on file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gourmet_core::catalog::{demo_menu, CatalogState};
use gourmet_core::config::{Config, LogFormat};
use gourmet_core::store::PreferencesStore;
use gourmet_core::{MenuCatalog, MenuLoader, ReservationStore, SqliteKvStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!("Starting Gourmet demo");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Menu source: {:?}", config.menu_source);
    tracing::info!(
        "Opening hours: {}-{} minutes",
        config.opening_hours.open_minutes,
        config.opening_hours.close_minutes
    );

    let kv = SqliteKvStore::open(&config.db_path).await?;
    let preferences = PreferencesStore::new(kv.clone()).load().await;

    let mut catalog = MenuCatalog::default();
    catalog.select_category(preferences.category);
    catalog.set_favorites(preferences.favorites);

    let state = catalog
        .refresh(&MenuLoader::default(), &config.menu_source)
        .await
        .clone();
    if let CatalogState::Unavailable(reason) = state {
        tracing::warn!("Menu unavailable ({}), falling back to demo menu", reason);
        let ticket = catalog.begin_load();
        catalog.finish_load(ticket, Ok(demo_menu()));
    }

    for entry in catalog.visible() {
        let marker = if catalog.favorites().contains(entry.id) {
            " (favorite)"
        } else {
            ""
        };
        tracing::info!(
            "[{}] {} - €{}{}",
            entry.category,
            entry.title,
            entry.price,
            marker
        );
    }
    tracing::info!(
        "{} of {} menu entries visible for category {}",
        catalog.visible().len(),
        catalog.entries().len(),
        catalog.filter().category.as_str()
    );

    let reservations = ReservationStore::new(kv).list_reservations().await;
    tracing::info!("{} reservations on file", reservations.len());
    for reservation in &reservations {
        tracing::info!(
            "{} - {} at {} for {}",
            reservation.name,
            reservation.date,
            reservation.time,
            reservation.guests
        );
    }

    Ok(())
}
