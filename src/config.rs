use std::{
    env,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: resolve_data_dir(),
            host: env::var("HOST")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(IpAddr::from([0, 0, 0, 0])),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn resolve_data_dir() -> PathBuf {
    match env::var("MOOD_DATA_DIR") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from("data"),
    }
}
