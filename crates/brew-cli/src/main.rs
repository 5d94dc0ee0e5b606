use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "brew",
    about = "brewlab — build a beverage from a base, a creamer, and a syrup",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Path to brew.toml (defaults apply when the file is missing)
    #[arg(long, global = true, default_value = "brew.toml")]
    config: PathBuf,
    /// Database file, overriding [database].path
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bases, creamers, and syrups with the default selections
    Options {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Make and save a beverage.
    ///
    /// Unset options keep their default (the first item of each list).
    Make {
        #[arg(long)]
        base: Option<String>,
        #[arg(long)]
        creamer: Option<String>,
        #[arg(long)]
        syrup: Option<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List saved beverages
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show a saved beverage and restore its selections
    Show {
        /// Beverage id
        id: String,
    },
    /// Manage brew.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a starter brew.toml
    Init {
        #[arg(short, long, default_value = "brew.toml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,brew=info,brew_store=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let target = commands::StoreTarget {
        config: cli.config,
        db: cli.db,
    };

    match cli.command {
        Commands::Options { format } => commands::options::list(&target, format).await,
        Commands::Make {
            base,
            creamer,
            syrup,
            format,
        } => {
            let picks = commands::beverages::Picks {
                base,
                creamer,
                syrup,
            };
            commands::beverages::make(&target, picks, format).await
        }
        Commands::List { format } => commands::beverages::list(&target, format).await,
        Commands::Show { id } => commands::beverages::show(&target, &id).await,
        Commands::Config { action } => match action {
            ConfigAction::Init { path } => commands::config::init(&path),
        },
    }
}
