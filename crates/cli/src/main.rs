use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use voyage_kernel::settings::Settings;
use voyage_store::{fixtures, CatalogStore};

#[derive(Parser)]
#[command(name = "voyage", about = "Voyage travel catalog service", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve {
        /// Override the configured listen port.
        #[arg(long)]
        port: Option<u16>,

        /// Start with an empty catalog instead of the sample data.
        #[arg(long)]
        no_fixtures: bool,
    },
    /// Print the resolved settings as JSON.
    Settings,
    /// Print the sample catalog data as JSON.
    Fixtures {
        /// Only print one collection.
        #[arg(value_enum)]
        collection: Option<Collection>,
    },
    /// Print the merged OpenAPI document.
    Openapi,
}

#[derive(Clone, Copy, ValueEnum)]
enum Collection {
    Destinations,
    TripPackages,
    Flights,
    Hotels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().with_context(|| "failed to load Voyage settings")?;

    match cli.command {
        Command::Serve { port, no_fixtures } => serve(settings, port, no_fixtures),
        Command::Settings => print_json(&serde_json::to_value(&settings)?),
        Command::Fixtures { collection } => print_json(&fixtures_json(collection)?),
        Command::Openapi => {
            let store = voyage_store::shared(CatalogStore::new());
            let registry = voyage_app::build_registry(&store)?;
            print_json(&voyage_http::openapi_document(&registry))
        }
    }
}

fn serve(mut settings: Settings, port: Option<u16>, no_fixtures: bool) -> anyhow::Result<()> {
    if let Some(port) = port {
        settings.server.port = port;
    }
    if no_fixtures {
        settings.catalog.seed_fixtures = false;
    }

    voyage_telemetry::init(&settings.telemetry)?;
    tracing::info!(address = %settings.server.bind_address(), "starting voyage from cli");

    tokio::runtime::Runtime::new()
        .context("failed to start tokio runtime")?
        .block_on(voyage_app::run(settings))
}

fn fixtures_json(collection: Option<Collection>) -> anyhow::Result<Value> {
    let value = match collection {
        Some(Collection::Destinations) => serde_json::to_value(fixtures::destinations())?,
        Some(Collection::TripPackages) => serde_json::to_value(fixtures::trip_packages())?,
        Some(Collection::Flights) => serde_json::to_value(fixtures::flights())?,
        Some(Collection::Hotels) => serde_json::to_value(fixtures::hotels())?,
        None => json!({
            "destinations": fixtures::destinations(),
            "tripPackages": fixtures::trip_packages(),
            "flights": fixtures::flights(),
            "hotels": fixtures::hotels(),
        }),
    };
    Ok(value)
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
