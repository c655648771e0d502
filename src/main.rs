//! taskflow - role and permission inspection CLI
//!
//! Prints the compiled-in role table and evaluates authorization checks.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use taskflow::auth::rbac::{Permission, RbacService};
use taskflow::config::Config;
use taskflow::utils::init_logging;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(about = "Inspect taskflow roles and evaluate permission checks")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "TASKFLOW_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `taskflow=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the role × permission matrix
    Matrix {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the permissions granted to a role
    Permissions {
        /// Role name (owner, admin, member)
        role: String,

        /// Emit JSON instead of one permission per line
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a permission check; exits 1 when denied
    Check {
        /// Role of the acting user
        #[arg(long)]
        role: String,

        /// Permission name, e.g. `task:update`
        #[arg(long)]
        permission: String,

        /// Identity that created the resource
        #[arg(long)]
        owner: Option<String>,

        /// Identity of the acting user
        #[arg(long)]
        actor: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli).await?;
    init_logging(&config.logging).context("failed to initialize logging")?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Commands::Matrix { json } => print_matrix(json)?,
        Commands::Permissions { role, json } => print_permissions(&role, json)?,
        Commands::Check {
            role,
            permission,
            owner,
            actor,
        } => {
            let decision = RbacService::explain_action_named(
                &role,
                &permission,
                owner.as_deref(),
                actor.as_deref(),
            );
            info!(role = %role, permission = %permission, reason = decision.reason(), "Check evaluated");

            if decision.is_allowed() {
                println!("allowed");
            } else {
                println!("denied");
                return Ok(ExitCode::from(1));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// File configuration (if any) overlaid with `TASKFLOW_*` environment values
async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::read_file(path)
            .await
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::default(),
    };

    let mut config = base.with_env_overrides()?;
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.validate()?;
    Ok(config)
}

fn print_matrix(json: bool) -> anyhow::Result<()> {
    let rows = RbacService::matrix();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mark = |granted: bool| if granted { "yes" } else { "-" };
    println!("{:<20} {:<6} {:<6} {:<6}", "PERMISSION", "OWNER", "ADMIN", "MEMBER");
    for row in rows {
        println!(
            "{:<20} {:<6} {:<6} {:<6}",
            row.permission.as_str(),
            mark(row.owner),
            mark(row.admin),
            mark(row.member)
        );
    }
    Ok(())
}

fn print_permissions(role: &str, json: bool) -> anyhow::Result<()> {
    let permissions: &[Permission] = RbacService::get_permissions_by_name(role);

    if json {
        println!("{}", serde_json::to_string(permissions)?);
        return Ok(());
    }

    for permission in permissions {
        println!("{:<20} {}", permission.as_str(), permission.description());
    }
    Ok(())
}
