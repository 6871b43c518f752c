use crate::catalog::CatalogSource;
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Path or HTTP(S) URL of the image catalog (JSON array or NDJSON).
    #[arg(long)]
    #[arg(default_value = "images.example.json")]
    pub catalog: CatalogSource,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:5500", "http://localhost:5500"])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    pub maps_api_key: Option<String>,
}
