//! Command-line front end for the timetrack service.
//!
//! Each subcommand maps onto one API client operation. Auth state is loaded
//! from the token store at startup and passed through explicitly.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use timetrack::api::{account, time, types};
use timetrack::{ApiClient, AuthSession, KeyringStore, TokenStore};

/// Projects the service accepts time entries for.
const PROJECTS: [&str; 4] = [
    "Website Redesign",
    "Mobile App Development",
    "API Integration",
    "Internal Tools",
];

#[derive(Parser, Debug)]
#[command(name = "timetrack", about = "Track hours against the timetrack service")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in with an existing account
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Add a time entry
    Add {
        #[arg(long)]
        project: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        hours: f64,
        /// Entry date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show this week's summary
    Summary,
    /// Show this week's summary for one project
    ProjectSummary {
        #[arg(long)]
        project: String,
    },
    /// Check that the service is reachable
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args = Args::parse();

    let base_url = std::env::var("TIMETRACK_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());

    let store: Arc<dyn TokenStore> = Arc::new(KeyringStore::new());
    let client = ApiClient::new(&base_url, Arc::clone(&store));

    match run(args.command, &client, store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Command,
    client: &ApiClient,
    store: Arc<dyn TokenStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = AuthSession::load(store)?;

    match command {
        Command::Signup {
            username,
            email,
            password,
        } => {
            let resp = account::signup(
                client,
                &types::SignupRequest {
                    username,
                    email,
                    password,
                },
            )
            .await?;
            session.login(resp.token)?;
            println!("{}", resp.message);
        }
        Command::Login { username, password } => {
            let resp = account::login(client, &types::LoginRequest { username, password }).await?;
            session.login(resp.token)?;
            println!("{}", resp.message);
        }
        Command::Logout => {
            // The local token is dropped even if the service call fails;
            // a dead session on the server side expires on its own.
            let result = account::logout(client).await;
            session.logout()?;
            match result {
                Ok(resp) => println!("{}", resp.message),
                Err(e) => log::warn!("Logout request failed: {}", e),
            }
        }
        Command::Add {
            project,
            description,
            hours,
            date,
        } => {
            require_auth(&session)?;
            if !PROJECTS.contains(&project.as_str()) {
                return Err(format!(
                    "unknown project {:?} (expected one of: {})",
                    project,
                    PROJECTS.join(", ")
                )
                .into());
            }
            if description.trim().is_empty() {
                return Err("description must not be empty".into());
            }
            if hours <= 0.0 {
                return Err("hours must be greater than zero".into());
            }

            let entry = types::NewTimeEntry {
                project_name: project,
                description,
                hours,
                entry_date: Some(
                    date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
                ),
            };
            let resp = time::add_entry(client, &entry).await?;
            println!("{}", resp.message);
        }
        Command::Summary => {
            require_auth(&session)?;
            let summary = time::week_summary(client).await?;
            print_summary(&summary);
        }
        Command::ProjectSummary { project } => {
            require_auth(&session)?;
            let resp = time::project_week_summary(client, &project).await?;
            println!("Project: {}", resp.project_name);
            print_summary(&resp.summary);
        }
        Command::Health => {
            let resp = account::health(client).await?;
            println!("{}", resp.message);
        }
    }

    Ok(())
}

fn require_auth(session: &AuthSession) -> Result<(), Box<dyn std::error::Error>> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err("not signed in (run `timetrack login` first)".into())
    }
}

fn print_summary(summary: &types::WeekSummary) {
    println!("Week {} to {}", summary.week_start, summary.week_end);
    println!("Total hours: {}", summary.total_hours);

    if !summary.project_totals.is_empty() {
        println!();
        println!("By project:");
        for (project, hours) in &summary.project_totals {
            println!("  {:<24} {}", project, hours);
        }
    }

    if !summary.time_entries.is_empty() {
        println!();
        println!("Entries:");
        for entry in &summary.time_entries {
            println!(
                "  {}  {:>5}h  {:<24} {}",
                entry.entry_date, entry.hours, entry.project_name, entry.description
            );
        }
    }
}
