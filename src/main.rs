//! review-console - one-shot command line front end for the review service.
//!
//! Opens the requested store, runs a single fetch and prints the resulting
//! records as JSON on stdout. Logs go to stderr.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use serde::Serialize;

use review_console::adapters::{
    FileCredentialStore, HttpClientConfig, HttpRemoteClient, InMemoryCredentialStore,
};
use review_console::application::{
    ClientContext, Dispatch, EmployeeStore, FeedbackStore, ReviewStore, SessionStore,
};
use review_console::config::AppConfig;
use review_console::domain::foundation::EmployeeId;
use review_console::domain::resource::{Entity, ResourceState};
use review_console::ports::CredentialStore;
use review_console::telemetry;

#[derive(Parser)]
#[command(name = "review-console")]
#[command(about = "Browse employees, reviews and feedback on the review service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every employee account
    Employees,

    /// List the reviews owned by an employee
    Reviews { owner: EmployeeId },

    /// List feedback requests addressed to the signed-in employee
    Feedbacks,

    /// Show the signed-in employee
    Whoami,

    /// Sign in; the password is read from the first line of stdin
    Login { username: String },

    /// Forget the stored token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init_tracing(&config.logging).context("Failed to install tracing")?;

    let credentials: Arc<dyn CredentialStore> = match &config.credentials.token_path {
        Some(path) => Arc::new(FileCredentialStore::new(path)),
        None => Arc::new(InMemoryCredentialStore::new()),
    };
    let client = HttpRemoteClient::new(HttpClientConfig::from(&config.api), credentials)?;
    let context = ClientContext::from_client(Arc::new(client));

    match cli.command {
        Commands::Employees => {
            let scope = context.enter::<EmployeeStore>();
            let outcome = scope.actions().fetch_employee_list().await;
            scope.state().read(|state| print_list(outcome, state))
        }
        Commands::Reviews { owner } => {
            let scope = context.enter::<ReviewStore>();
            let outcome = scope.actions().fetch_review_list(owner).await;
            scope.state().read(|state| print_list(outcome, state))
        }
        Commands::Feedbacks => {
            let scope = context.enter::<FeedbackStore>();
            let outcome = scope.actions().fetch_feedback_list().await;
            scope.state().read(|state| print_list(outcome, state))
        }
        Commands::Whoami => {
            let (scope, outcome) = context.enter_restored().await;
            ensure_completed(outcome)?;
            print_json(&scope.state().snapshot().user())
        }
        Commands::Login { username } => {
            let password = read_password()?;
            let scope = context.enter::<SessionStore>();
            let outcome = scope.actions().login(&username, &password).await;
            ensure_completed(outcome)?;
            print_json(&scope.state().snapshot().user())
        }
        Commands::Logout => {
            let scope = context.enter::<SessionStore>();
            scope.actions().logout();
            Ok(())
        }
    }
}

fn ensure_completed(outcome: Dispatch) -> Result<()> {
    match outcome {
        Dispatch::Completed => Ok(()),
        other => bail!("request did not complete ({:?}); see log for details", other),
    }
}

fn print_list<E: Entity + Serialize>(outcome: Dispatch, state: &ResourceState<E>) -> Result<()> {
    ensure_completed(outcome)?;
    let records: Vec<&E> = state.iter().collect();
    print_json(&records)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_password() -> Result<SecretString> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(SecretString::new(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
