//! Address Book CLI - serve and inspect the named coordinate store

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use address_book::config::{self, AppConfig};
use address_book::{ui, Address, AddressService, RangeQuery, SqliteStore};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "address-book")]
#[command(version)]
#[command(about = "Named coordinate store with CRUD and radius queries over HTTP")]
#[command(long_about = r#"
Address Book keeps named coordinate pairs in SQLite and serves them over HTTP:
  • GET/POST/DELETE /address/
  • GET/PUT/DELETE  /address/{name}
  • GET /address-range?longitude=..&latitude=..&distance=..

Example usage:
  address-book serve --port 8000
  address-book range --longitude 14.6 --latitude 121.05 --distance 0.02
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the store and run the HTTP service
    Serve {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Skip inserting sample stations into an empty store
        #[arg(long)]
        no_seed: bool,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List every stored address
    List {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single address by name
    Get {
        /// Exact, case-sensitive address name
        name: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find addresses within a distance of a point
    Range {
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        #[arg(long)]
        distance: f64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Serve { database, host, port, no_seed } => {
            let settings = file_config.resolve(database, host, port, no_seed);
            config::ensure_db_dir(&settings.database)?;

            let service = AddressService::new(SqliteStore::new(&settings.database));
            if service.bootstrap(settings.seed)? {
                ui::success("Seeded sample stations into an empty store");
            }

            ui::header("Address Book");
            ui::info("Database", &settings.database.display().to_string());
            ui::info("Listening", &format!("http://{}", settings.addr));

            address_book::server::start_server(settings.addr, Arc::new(service)).await?;
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &AppConfig::with_defaults(), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }

        Commands::List { database, json } => {
            let service = open_service(&file_config, database)?;
            let list = service.list()?;
            print_addresses(&list.results, json)?;
        }

        Commands::Get { name, database, json } => {
            let service = open_service(&file_config, database)?;
            let address = service.get(&name)?;
            print_addresses(std::slice::from_ref(&address), json)?;
        }

        Commands::Range { longitude, latitude, distance, database, json } => {
            let service = open_service(&file_config, database)?;
            let query = RangeQuery { longitude, latitude, distance };
            tracing::debug!("Range query {:?}", query);
            let list = service.in_range(&query)?;
            print_addresses(&list.results, json)?;
        }
    }

    Ok(())
}

/// Open the configured store for a one-shot read command.
fn open_service(file_config: &AppConfig, database: Option<PathBuf>) -> anyhow::Result<AddressService<SqliteStore>> {
    let settings = file_config.resolve(database, None, None, true);
    if !Path::new(&settings.database).exists() {
        anyhow::bail!(
            "no database at {} (run `address-book serve` first)",
            settings.database.display()
        );
    }
    Ok(AddressService::new(SqliteStore::open(&settings.database)?))
}

fn print_addresses(addresses: &[Address], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(addresses)?);
    } else if addresses.is_empty() {
        ui::warn("No addresses found.");
    } else {
        println!("{}", ui::address_table(addresses));
    }
    Ok(())
}
