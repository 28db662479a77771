//! Notes Service — token-protected CRUD over a directory of JSON note files.
//!
//! Default: http://127.0.0.1:8000/

mod config;
mod error;
mod routes;
mod service;
mod store;
mod tokens;

use config::Config;
use routes::AppState;
use service::NoteService;
use std::sync::Arc;
use std::time::Instant;
use store::NoteStore;
use tokens::TokenStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    log::info!("Opening notes directory at: {}", config.notes_dir.display());
    let store = match NoteStore::new(&config.notes_dir) {
        Ok(s) => s,
        Err(e) => {
            log::error!(
                "Failed to create notes directory {}: {}",
                config.notes_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let tokens = TokenStore::new(&config.tokens_file);
    if !tokens.path().exists() {
        log::warn!(
            "Token file {} does not exist; every request will be rejected until it is created",
            tokens.path().display()
        );
    }

    let state = Arc::new(AppState {
        service: NoteService::new(tokens, store),
        start_time: Instant::now(),
    });

    let app = routes::router(state);

    let addr = config.bind_addr();
    log::info!("Notes Service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
