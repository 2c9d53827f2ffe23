use std::fs::File;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use serde_json::Value;
use vendor_admin::table::{category_columns, render_text_table};
use vendor_admin::{AdminApi, ApiConfig, ApiError, Category, Credentials, RegistrationRequest};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to read {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "vendor-admin", about = "Vendor admin API client")]
struct Cli {
    /// Overrides `ADMIN_API_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides `ADMIN_API_TIMEOUT_SECS`.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Vendors,
    /// Print a JSON array of categories as a table.
    Categories {
        #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = ApiConfig::from_env().with_overrides(cli.base_url, cli.timeout_secs);

    match cli.command {
        Command::Login { email, password } => {
            let api = AdminApi::new(&config)?;
            let resp = api.login(&Credentials::new(email, password)).await?;
            print_json(&resp.body)
        }
        Command::Register { name, email, password } => {
            let api = AdminApi::new(&config)?;
            let resp = api.register(&RegistrationRequest::new(name, email, password)).await?;
            print_json(&resp.body)
        }
        Command::Vendors => {
            let api = AdminApi::new(&config)?;
            let resp = api.list_vendors().await?;
            print_json(&resp.body)
        }
        Command::Categories { input } => {
            let raw = read_input(&input)?;
            let rows: Vec<Category> = serde_json::from_str(&raw)?;
            let table = render_text_table(category_columns(), &rows)?;
            println!("{table}");
            Ok(())
        }
    }
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut raw = String::new();
    let result = if path == "-" {
        io::stdin().read_to_string(&mut raw)
    } else {
        File::open(path).and_then(|mut file| file.read_to_string(&mut raw))
    };
    result.map_err(|source| CliError::Input { path: path.to_owned(), source })?;
    Ok(raw)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
