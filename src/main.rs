//! Domain Expiry - TLS certificate and domain registration expiry checker
//!
//! This tool provides functionality for:
//! - Checking a domain's certificate and registration expiry dates
//! - Classifying each date as expired, expiring soon or healthy
//! - Interactive checking of several domains with a running results table
//! - A JSON-lines request mode for use by other programs

use clap::Parser;
use console::style;
use domain_expiry::cli::{Cli, InteractiveSession, SubCommand};
use domain_expiry::commands;
use domain_expiry::output::print_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for JSON output
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let settings = cli.load_settings()?;

    // Interactive mode
    if cli.is_interactive() {
        let mut session = InteractiveSession::new(&settings);
        return session.run().await;
    }

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            SubCommand::Check(args) => commands::run_check(&args.domain, &settings, cli.json).await,
            SubCommand::Serve => commands::run_serve(&settings).await,
        };
    }

    // Default: check domain if provided
    if let Some(domain) = cli.normalized_domain() {
        return commands::run_check(&domain, &settings, cli.json).await;
    }

    // No command or domain provided - show help
    println!("{}", style("Domain Expiry").cyan().bold());
    println!("Check when a domain's TLS certificate and registration expire\n");
    println!("Usage: domain-expiry [OPTIONS] [DOMAIN]");
    println!("       domain-expiry <COMMAND>\n");
    println!("Run 'domain-expiry --help' for more information.");
    println!("Run 'domain-expiry --interactive' for interactive mode.");

    Ok(())
}
