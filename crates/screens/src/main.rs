mod cli;
mod color;
mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use jira_backend::JiraClient;
use output::output_error;
use screen_core::{MetadataSource, SiteContext};
use screen_mock::MockSource;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    color::init(cli.color);
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Commands that don't need a metadata source
    match &cli.command {
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            return Ok(());
        }
        Commands::Classify { system, custom } => {
            return commands::classify::handle_classify(
                system.as_deref(),
                custom.as_deref(),
                cli.format,
            );
        }
        _ => {}
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.url.clone(), cli.email.clone(), cli.token.clone());

    if let Some(dir) = screen_mock::get_mock_dir() {
        info!(dir = %dir.display(), "using mock metadata source");
        let source = MockSource::new(&dir)?;
        return run_with_source(&source, &config, cli);
    }

    let credentials = config.credentials()?;
    info!(url = credentials.url, "using Jira metadata source");
    let client = JiraClient::new(credentials.url, credentials.email, credentials.token);
    run_with_source(&client, &config, cli)
}

/// Run commands against any metadata source
fn run_with_source(source: &dyn MetadataSource, config: &Config, cli: &Cli) -> Result<()> {
    let site = SiteContext::resolve(source).context("Failed to resolve site epic fields")?;

    match &cli.command {
        Commands::Create {
            project,
            issue_type,
        } => commands::create::handle_create(
            source,
            site,
            project,
            issue_type.as_deref(),
            &config.filter_fields,
            cli.format,
        ),
        Commands::Edit { issue } => {
            commands::edit::handle_edit(source, site, issue, &config.filter_fields, cli.format)
        }
        Commands::Site => commands::site::handle_site(&site, cli.format),
        Commands::Classify { .. } | Commands::Completions { .. } => Ok(()),
    }
}
