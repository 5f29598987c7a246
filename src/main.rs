mod commands;
mod pdf;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdesk_core::config::EventDeskConfig;

#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(about = "View and edit your event page from the terminal")]
struct Cli {
    /// Operate on this event id instead of the configured one
    #[arg(long, global = true)]
    event: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in to the identity provider
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Render the event page
    Show,
    /// Toggle a checklist item by its row number
    Check {
        index: usize,
    },
    /// Checklist operations
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommands,
    },
    /// Edit the event in an interactive session
    Edit,
    /// Export the event page to a PDF
    Export,
    /// Plant a sample event document (refuses to overwrite an existing one)
    Seed,
}

#[derive(Subcommand)]
enum ChecklistCommands {
    /// Append a new checklist item
    Add {
        /// Item label (prompted when omitted)
        label: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EventDeskConfig::load()?;
    let event_id = cli.event.unwrap_or_else(|| config.event_id.clone());

    match cli.command {
        Commands::Login { email } => commands::login::run(&config, email).await,
        Commands::Logout => commands::logout::run(&config).await,
        Commands::Show => commands::show::run(&config, &event_id),
        Commands::Check { index } => commands::check::run(&config, &event_id, index),
        Commands::Checklist { command } => match command {
            ChecklistCommands::Add { label } => commands::checklist::add(&config, &event_id, label),
        },
        Commands::Edit => commands::edit::run(&config, &event_id),
        Commands::Export => commands::export::run(&config, &event_id),
        Commands::Seed => commands::seed::run(&config, &event_id),
    }
}
