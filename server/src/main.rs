mod config;
mod middleware;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "mock auth server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = config::ServerConfig::from_env()?;
    let registry = config.load_registry()?;

    for user in config.image_hosts.rejected_avatars(&registry) {
        tracing::warn!(user_id = %user.id, image_url = %user.image_url, "avatar host not in IMAGE_REMOTE_HOSTS");
    }
    tracing::info!(
        users = registry.users().len(),
        default_user = registry.default_user_id(),
        source = ?config.users_file,
        image_hosts = ?config.image_hosts.hosts(),
        "mock user registry loaded"
    );

    let state = state::AppState::new(Arc::new(registry), config.cookie_secure);
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos pages disabled; serving API routes only");
            routes::api_routes(state)
        }
    };
    let app = routes::with_layers(app);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, "mock auth server listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
