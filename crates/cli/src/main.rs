use std::io::Write;

use anyhow::Context;
use bookshelf_app::modules::books::schema::encode_book;
use bookshelf_db::{default_seed, BootstrapOutcome, Store};
use bookshelf_kernel::settings::Settings;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Books and authors over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Bootstrap the database and serve the HTTP API (default)
    Serve,
    /// Create the schema, seeding the books table if it is new
    Bootstrap {
        /// Create empty tables instead of loading the default books
        #[arg(long)]
        no_seed: bool,
    },
    /// Print every stored book as one JSON object per line
    Books,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;
    bookshelf_telemetry::init(&settings.telemetry)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => bookshelf_app::serve(settings).await,
        Command::Bootstrap { no_seed } => bootstrap(&settings, no_seed),
        Command::Books => print_books(&settings),
    }
}

fn bootstrap(settings: &Settings, no_seed: bool) -> anyhow::Result<()> {
    let store = Store::new(&settings.database.path);
    let seed = if no_seed || !settings.database.seed {
        Vec::new()
    } else {
        default_seed()
    };

    let outcome = store
        .bootstrap(&seed)
        .with_context(|| format!("failed to bootstrap {}", store.path().display()))?;

    match outcome {
        BootstrapOutcome::Created { seeded } => {
            println!("created {} with {seeded} books", store.path().display())
        }
        BootstrapOutcome::AlreadyPresent => {
            println!("{} already bootstrapped", store.path().display())
        }
    }
    Ok(())
}

fn print_books(settings: &Settings) -> anyhow::Result<()> {
    let store = Store::new(&settings.database.path);
    let books = store.list_books().context("failed to list books")?;

    let mut stdout = std::io::stdout().lock();
    for book in &books {
        serde_json::to_writer(&mut stdout, &encode_book(book))?;
        writeln!(stdout)?;
    }
    Ok(())
}
