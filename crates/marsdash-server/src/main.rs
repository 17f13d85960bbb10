mod assets;
mod error;
mod nasa;
mod server;

use std::sync::Arc;

use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    let port: u16 = env_or("PORT", "3000").parse().expect("invalid PORT");
    let api_key = env_or("API_KEY", "DEMO_KEY");
    let nasa_base = env_or("NASA_API_URL", nasa::NASA_API);

    let http = reqwest::Client::builder()
        .user_agent(format!("marsdash/{}", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("failed to build HTTP client");

    let state = Arc::new(server::AppState {
        nasa: nasa::NasaClient::new(http, api_key.clone(), nasa_base.clone()),
        store: Mutex::new(marsdash_core::Store::new()),
    });

    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    eprintln!("[marsdash] http://localhost:{}", port);
    eprintln!("[marsdash] Mars Rover Dashboard v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("[marsdash] NASA API: {}", nasa_base);
    if api_key == "DEMO_KEY" {
        eprintln!("[marsdash] using DEMO_KEY (set API_KEY for real rate limits)");
    }

    axum::serve(listener, app).await.expect("server error");
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
