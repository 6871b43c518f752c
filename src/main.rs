use clap::Parser;
use cli::Args;
use storage::sessions::HashMapSessionsStorage;

mod app_context;
mod catalog;
mod cli;
mod game;
mod health;
mod http;
mod logging;
mod scoring;
mod selector;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();
    let catalog = catalog::init(&args).await;
    let game_config = game::init(&args);
    let app_context = app_context::init::<HashMapSessionsStorage>(catalog, game_config);
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .unwrap_or_else(|err| panic!("Failed to bind to {}: {err}", args.listen_address));
    tracing::info!(listen_address = %args.listen_address, "Listening.");
    axum::serve(listener, router)
        .await
        .expect("Failed to start the server.");
}
