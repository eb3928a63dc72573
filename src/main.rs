#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = config::Settings::from_env().expect("invalid configuration");
    let port = settings.port;
    tracing::info!(
        api_url = %settings.api_url,
        new_dashboard = settings.new_dashboard,
        cookie_secure = settings.cookie_secure,
        "configuration loaded"
    );

    let state = state::AppState::new(settings);
    let app = routes::app(state).expect("failed to build router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gymdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
