use mood_tracker::{AppState, Config, EntryStore, FileStorage, router};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    fs::create_dir_all(&config.data_dir).await?;

    let store = EntryStore::new(FileStorage::new(&config.data_dir));
    let entries = store.mood_entries().await?;
    info!(
        data_dir = %config.data_dir.display(),
        mood_entries = entries.len(),
        "storage ready"
    );

    let app = router(AppState::new(store));
    let addr = config.listen_addr();

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
