use std::{env, net::SocketAddr};

use tracing::{info, warn};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn load() -> Self {
        Self {
            addr: load_addr("SCORER_ADDR"),
        }
    }
}

fn load_addr(key: &str) -> SocketAddr {
    let fallback = SocketAddr::from(([127, 0, 0, 1], 3000));
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {DEFAULT_ADDR}");
        DEFAULT_ADDR.to_string()
    });

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {DEFAULT_ADDR}");
        fallback
    })
}
