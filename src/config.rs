use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "address_book.db";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8000;

/// Contents of `address-book.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    pub database: Option<PathBuf>,
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub seed: Option<bool>,
}

/// Effective settings after layering CLI flags over the file over defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    pub addr: SocketAddr,
    pub seed: bool,
}

impl AppConfig {
    /// Config written by `init`: the defaults spelled out.
    pub fn with_defaults() -> Self {
        Self {
            database: Some(PathBuf::from(DEFAULT_DATABASE)),
            host: Some(DEFAULT_HOST),
            port: Some(DEFAULT_PORT),
            seed: Some(true),
        }
    }

    /// Resolve settings; any `Some` override wins over the file value.
    pub fn resolve(
        &self,
        database: Option<PathBuf>,
        host: Option<IpAddr>,
        port: Option<u16>,
        no_seed: bool,
    ) -> Settings {
        let database = database
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));
        let host = host.or(self.host).unwrap_or(DEFAULT_HOST);
        let port = port.or(self.port).unwrap_or(DEFAULT_PORT);
        let seed = !no_seed && self.seed.unwrap_or(true);

        Settings {
            database,
            addr: SocketAddr::new(host, port),
            seed,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("address-book.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<AppConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &AppConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
