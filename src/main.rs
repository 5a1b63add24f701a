//! Instagram Downloader - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_downloader::{
    api::InstagramApi,
    cli::Args,
    config::{validate_config, Config},
    download::download_profile,
    error::{exit_codes, Error, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_report,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Aborted => ExitCode::from(exit_codes::ABORT as u8),
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Extraction(_) | Error::SchemaMismatch(_) => {
                    ExitCode::from(exit_codes::EXTRACTION_ERROR as u8)
                }
                Error::Upstream(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let quiet = args.quiet;
    if !quiet {
        print_banner();
    }

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        if !quiet {
            print_warning(&format!(
                "Configuration file not found: {}",
                config_path.display()
            ));
            print_info("Using default configuration with CLI arguments");
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration before any network activity
    validate_config(&config)?;

    if !quiet {
        print_config_summary(
            &config.target.username,
            config.options.workers,
            &config.download_directory().display().to_string(),
        );
    }

    // One shared transport for the extractor, the paginator, and every worker
    let api = Arc::new(InstagramApi::new(&config)?);

    let report = download_profile(api, &config).await?;

    if !quiet {
        print_run_report(&report);
    }

    Ok(())
}
