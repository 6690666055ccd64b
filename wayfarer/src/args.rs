use std::path::PathBuf;

use clap::Parser;

/// Wayfarer trip storyteller service
#[derive(Debug, Parser)]
#[command(name = "wayfarer", about = "Trip itinerary and narration backend")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "wayfarer.toml", env = "WAYFARER_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "WAYFARER_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
