//! KRIXO command-line client.
//!
//! Thin wrapper over [`krixo_client::ApiClient`]: every subcommand maps to one
//! facade operation and prints the backend's JSON response.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use krixo_client::api::{LoginRequest, NewCommand, NewWorker};
use krixo_client::config::loader::{load_config, ConfigError};
use krixo_client::config::validation::validate_config;
use krixo_client::config::ClientConfig;
use krixo_client::observability::logging::init_logging;
use krixo_client::{ApiClient, CredentialStore};

#[derive(Parser)]
#[command(name = "krixo-cli")]
#[command(about = "Command-line client for the KRIXO backend API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(short, long)]
    backend: Option<String>,

    /// Never fall back to relays
    #[arg(long)]
    no_relay: bool,

    /// Maximum number of relays tried per operation
    #[arg(long)]
    max_relays: Option<usize>,

    /// Bearer token of an existing session
    #[arg(short, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage commands (job requests)
    Commands {
        #[command(subcommand)]
        action: CommandAction,
    },
    /// Manage workers
    Workers {
        #[command(subcommand)]
        action: WorkerAction,
    },
    /// Register an account from a raw JSON body
    Register {
        #[arg(long)]
        json: String,
    },
    /// Show an account
    Account { id: String },
    /// Show an account as a worker profile
    Profile { id: String },
    /// Log in and print the session response
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum CommandAction {
    List,
    Create(CreateCommandArgs),
    Status { id: String, status: String },
    Delete { id: String },
}

#[derive(Args)]
struct CreateCommandArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    /// Requested service (repeatable)
    #[arg(long = "service", required = true)]
    services: Vec<String>,
    #[arg(long, default_value_t = 1)]
    workers: u32,
    #[arg(long)]
    start: String,
    #[arg(long)]
    end: String,
}

#[derive(Subcommand)]
enum WorkerAction {
    List,
    Create(CreateWorkerArgs),
    Status {
        id: String,
        status: String,
        #[arg(long)]
        password: Option<String>,
    },
    Delete { id: String },
}

#[derive(Args)]
struct CreateWorkerArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: Option<String>,
    #[arg(long)]
    position: String,
    #[arg(long, default_value = "")]
    experience: String,
    #[arg(long, default_value = "")]
    message: String,
    #[arg(long)]
    accepted: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Warning: logging not initialized: {}", e);
    }

    let credentials = cli
        .token
        .clone()
        .map(|token| CredentialStore::with_token(token))
        .unwrap_or_default();

    let client = match ApiClient::new(&config, credentials) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    match execute(&client, cli.command).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the config file (or defaults) and apply command-line overrides.
fn build_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };

    if let Some(backend) = &cli.backend {
        config.backend.base_url = backend.clone();
    }
    if cli.no_relay {
        config.relay.enabled = false;
    }
    if let Some(max) = cli.max_relays {
        config.relay.max_attempts = Some(max);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

async fn execute(client: &ApiClient, command: Command) -> Result<Value, Box<dyn std::error::Error>> {
    let value = match command {
        Command::Commands { action } => match action {
            CommandAction::List => client.commands().list().await?,
            CommandAction::Create(args) => {
                let command = NewCommand {
                    name: args.name,
                    phone: args.phone,
                    services: args.services,
                    workers: args.workers,
                    start: args.start,
                    end: args.end,
                };
                client.commands().create(&command).await?
            }
            CommandAction::Status { id, status } => client.commands().update_status(&id, &status).await?,
            CommandAction::Delete { id } => client.commands().delete(&id).await?,
        },
        Command::Workers { action } => match action {
            WorkerAction::List => client.workers().list().await?,
            WorkerAction::Create(args) => {
                let worker = NewWorker {
                    name: args.name,
                    phone: args.phone,
                    email: args.email,
                    password: args.password,
                    position: args.position,
                    experience: args.experience,
                    message: args.message,
                    is_accepted: args.accepted,
                };
                client.workers().create(&worker).await?
            }
            WorkerAction::Status { id, status, password } => {
                client
                    .workers()
                    .update_status(&id, &status, password.as_deref())
                    .await?
            }
            WorkerAction::Delete { id } => client.workers().delete(&id).await?,
        },
        Command::Register { json } => {
            let account: Value = serde_json::from_str(&json)?;
            client.accounts().register(&account).await?
        }
        Command::Account { id } => client.accounts().get(&id).await?,
        Command::Profile { id } => {
            let profile = client.accounts().profile(&id).await?;
            serde_json::to_value(profile)?
        }
        Command::Login { email, password } => {
            client
                .accounts()
                .login(&LoginRequest { email, password })
                .await?
        }
    };

    Ok(value)
}
