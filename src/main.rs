use clap::Parser;
use seqsim::cli::{Cli, Commands};
use seqsim::types::config::Config;
use seqsim::SeqsimResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> SeqsimResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet); a broken file is an error, a missing one is not
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("seqsim={}", log_level)
            .parse()
            .unwrap_or_else(|_| "seqsim=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Init { path } => {
            seqsim::cli::commands::init(path)?;
        }
        Commands::Score { a, b, json } => {
            seqsim::cli::commands::score(&a, &b, json, &config)?;
        }
        Commands::Identity { sequence } => {
            seqsim::cli::commands::identity(&sequence, &config)?;
        }
        Commands::Distance { a, b, json } => {
            seqsim::cli::commands::distance(&a, &b, json, &config)?;
        }
        Commands::Config => {
            seqsim::cli::commands::config_cmd(&cli.config, &config)?;
        }
        Commands::Version => {
            seqsim::cli::commands::version();
        }
    }

    Ok(())
}
