use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sipesc_auth::access;
use sipesc_cli::commands::{self, Check};
use sipesc_config::{JwtConfig, SessionConfig};
use sipesc_store::{SessionStore, build_store};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sipesc-cli")]
#[command(about = "SIPESC CLI - Sign in and check access decisions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with a demo account
    Login {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the signed-in principal
    Whoami,
    /// Ask the access evaluator a question (exit code 0 when allowed, 1 when denied)
    Check {
        #[command(subcommand)]
        check: Check,
    },
    /// List the demo accounts
    Accounts,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = SessionConfig::from_env().with_file_backend();
    let sessions = SessionStore::new(build_store(&config), config.namespace.clone());

    let result = match cli.command {
        Commands::Login { email, password } => handle_login(&sessions, email, password).await,
        Commands::Logout => handle_logout(&sessions).await,
        Commands::Whoami => handle_whoami(&sessions).await,
        Commands::Check { check } => handle_check(&sessions, &check).await,
        Commands::Accounts => {
            handle_accounts();
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn handle_login(
    sessions: &SessionStore,
    email: Option<String>,
    password: Option<String>,
) -> Result<ExitCode> {
    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let jwt_config = JwtConfig::from_env();
    match commands::login(sessions, &jwt_config, &email, &password).await {
        Ok(session) => {
            println!("\n✅ Logged in successfully!");
            println!("   Name: {}", session.user.name);
            println!("   Role: {}", session.user.role);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("\n❌ Login failed: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn handle_logout(sessions: &SessionStore) -> Result<ExitCode> {
    commands::logout(sessions).await?;
    println!("✅ Logged out");
    Ok(ExitCode::SUCCESS)
}

async fn handle_whoami(sessions: &SessionStore) -> Result<ExitCode> {
    let Some(session) = commands::current_session(sessions).await? else {
        println!("Not logged in");
        return Ok(ExitCode::FAILURE);
    };

    println!("{}", serde_json::to_string_pretty(&session.user)?);
    println!("{}", serde_json::to_string_pretty(&access::snapshot(&session.user))?);
    Ok(ExitCode::SUCCESS)
}

async fn handle_check(sessions: &SessionStore, check: &Check) -> Result<ExitCode> {
    let session = commands::current_session(sessions).await?;
    let principal = session.as_ref().map(|s| &s.user);

    if commands::evaluate(principal, check) {
        println!("allowed");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("denied");
        Ok(ExitCode::FAILURE)
    }
}

fn handle_accounts() {
    println!("{:<28} {:<12} {}", "EMAIL", "ROLE", "NAME");
    for account in commands::accounts() {
        println!("{:<28} {:<12} {}", account.email, account.role.as_str(), account.name);
    }
    println!("\nAny non-empty password is accepted.");
}
