//! Command-line entry point for the API Gateway account logging setup

use anyhow::{Context, Result};
use apigw_logging_setup::{AccountLoggingSetup, AwsOptions, DeploymentScope, SetupPlan};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Exit code for invalid input or a refused change
const EXIT_REFUSED: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "apigw-logging-setup",
    version,
    about = "Ensure API Gateway has an account-level CloudWatch logging role"
)]
struct Cli {
    /// AWS region (defaults to the standard AWS configuration chain)
    #[arg(long, global = true)]
    region: Option<String>,

    /// AWS shared config profile
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show what would be created, without changing anything
    Plan {
        /// Prefix used to namespace resource names in the deployment
        #[arg(long)]
        prefix: String,
    },
    /// Create and bind the logging role if the account has none
    Apply {
        /// Prefix used to namespace resource names in the deployment
        #[arg(long)]
        prefix: String,

        /// Apply without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the caller account and the currently attached logging role
    Status {
        /// Prefix used to namespace resource names in the deployment
        #[arg(long)]
        prefix: String,
    },
}

impl Command {
    fn prefix(&self) -> &str {
        match self {
            Self::Plan { prefix } | Self::Apply { prefix, .. } | Self::Status { prefix } => prefix,
        }
    }
}

enum Outcome {
    Done,
    Refused,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Validate before touching AWS configuration
    let scope = match DeploymentScope::new(cli.command.prefix()) {
        Ok(scope) => scope,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_REFUSED);
        }
    };

    let options = AwsOptions {
        region: cli.region.clone(),
        profile: cli.profile.clone(),
    };

    exit_code(run(&cli.command, &scope, &options).await)
}

fn exit_code(result: Result<Outcome>) -> ExitCode {
    match result {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Refused) => ExitCode::from(EXIT_REFUSED),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: &Command, scope: &DeploymentScope, options: &AwsOptions) -> Result<Outcome> {
    let service = AccountLoggingSetup::from_env(options).await;
    log::debug!("Loaded AWS configuration for scope '{}'", scope.prefix());

    match command {
        Command::Plan { .. } => {
            let plan = service
                .plan(scope)
                .await
                .context("Failed to plan account logging setup")?;
            print_json(&plan)?;
        }
        Command::Apply { yes, .. } => {
            let plan = service
                .plan(scope)
                .await
                .context("Failed to plan account logging setup")?;
            if needs_confirmation(&plan, *yes)
                && !confirm(&plan, atty::is(atty::Stream::Stdin))?
            {
                return Ok(Outcome::Refused);
            }
            let handle = service
                .apply(scope, plan)
                .await
                .context("Failed to apply account logging setup")?;
            print_json(&handle)?;
        }
        Command::Status { .. } => {
            let status = service
                .status(scope)
                .await
                .context("Failed to read account status")?;
            print_json(&status)?;
        }
    }

    Ok(Outcome::Done)
}

/// Creating the role needs an explicit go-ahead unless `--yes` was passed
fn needs_confirmation(plan: &SetupPlan, yes: bool) -> bool {
    plan.creates_role() && !yes
}

/// Show the plan and ask for confirmation; refuses outright when not `interactive`
fn confirm(plan: &SetupPlan, interactive: bool) -> Result<bool> {
    eprintln!(
        "Planned changes:\n{}",
        serde_json::to_string_pretty(plan).context("Failed to serialize plan")?
    );

    if !interactive {
        eprintln!(
            "Refusing to create the IAM role without confirmation: \
             pass --yes or run interactively in a TTY"
        );
        return Ok(false);
    }

    eprint!("Create the role and bind it to the API Gateway account? [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let confirmed = matches!(answer.trim(), "y" | "Y" | "yes");
    if !confirmed {
        eprintln!("Aborted.");
    }
    Ok(confirmed)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "apigw_logging_setup=info",
        1 => "apigw_logging_setup=debug",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
