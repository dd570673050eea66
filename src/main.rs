use dotenvy::dotenv;
use sipesc::logging::init_tracing;
use sipesc::metrics::{init_metrics, metrics_app};
use sipesc::modules::auth::service::AuthService;
use sipesc::router::init_router;
use sipesc::state::init_app_state;
use sipesc_config::{ServerConfig, SessionConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let metrics_handle = init_metrics();
    let server = ServerConfig::from_env();
    let session_config = SessionConfig::from_env();
    let state = init_app_state(&session_config);
    AuthService::spawn_session_sweeper(state.clone(), session_config.sweep_interval);

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let address = server.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(%address, "Server running");
    info!("Scalar UI available at http://{address}/scalar");
    axum::serve(listener, app).await?;

    Ok(())
}
