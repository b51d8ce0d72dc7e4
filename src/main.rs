use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use event_seeder::{
    config::Config,
    error::Error,
    seeder::{SeedOptions, Seeder},
    startup,
};

/// Seeds the event store with the CoShow 2024 booth event fixture: one
/// event, three missions, and a five-tier weighted reward catalog.
#[derive(Parser, Debug)]
#[command(name = "event-seeder", version, about)]
struct Args {
    /// Delete ALL rows of the four event tables before seeding.
    ///
    /// The wipe is unscoped: event data from other runs or other teams
    /// sharing the store is removed too. Without this flag the seeder
    /// refuses to run against a non-empty store.
    #[arg(long)]
    wipe: bool,

    /// Connection string of the target store; overrides DATABASE_URL.
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(args).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let config = match args.database_url {
        Some(database_url) => Config { database_url },
        None => Config::from_env()?,
    };

    let db = startup::connect_to_database(&config).await?;

    let summary = Seeder::new(&db).run(&SeedOptions { wipe: args.wipe }).await?;

    println!("{summary}");

    Ok(())
}
