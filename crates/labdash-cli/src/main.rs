//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to AppCore.

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use labdash_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads LABDASH_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = CliError::from_anyhow(err);
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Diagnostics run without loading the class list
    if matches!(command, Commands::Paths) {
        return handlers::paths::execute(&config.settings);
    }

    let mut ctx = bootstrap(config).await?;

    match command {
        Commands::List { json } => handlers::list::execute(&ctx, json)?,
        Commands::Show { name, json } => handlers::show::execute(&ctx, &name, json)?,
        Commands::Add { fields } => handlers::add::execute(&mut ctx, fields).await?,
        Commands::Update {
            original_name,
            fields,
        } => handlers::update::execute(&mut ctx, &original_name, fields).await?,
        Commands::Delete { name } => handlers::delete::execute(&mut ctx, &name).await?,
        Commands::Run {
            class,
            operation,
            student,
            vm,
        } => handlers::run::execute(&ctx, &class, operation, student, vm).await?,
        Commands::Task { task } => handlers::task::execute(&ctx, task).await?,
        Commands::Catalog { refresh } => handlers::catalog::execute(&mut ctx, refresh).await?,
        Commands::Paths => handlers::paths::execute(ctx.settings())?,
    }

    Ok(())
}
