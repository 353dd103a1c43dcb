use log::info;
use tokio::net::TcpListener;

use transactions_api::config::{config_path, load_config};
use transactions_api::transactions::{backing_file_path, service_root};
use transactions_api::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // ---- config ----
    let root = service_root();
    let config = load_config(&config_path(&root))?;
    let addr = config.addr();

    let state = AppState {
        transactions_path: backing_file_path(&root),
    };
    info!("serving {}", state.transactions_path.display());

    // ---- routes ----
    let app = app(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
