//! followdiff - GitHub follower reconciliation tool
//!
//! A command-line tool that lists the accounts you follow who don't follow
//! you back, and the followers you don't follow back.

use clap::Parser;
use followdiff::cli::args::{generate_completions, Cli, Commands};
use followdiff::cli::output::api_hint;
use followdiff::commands::{load_config, run_analyze, run_interactive};
use followdiff::domain::Category;
use followdiff::error::{AppError, ConfigError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        generate_completions(*shell);
        return Ok(());
    }

    let config = load_config(cli)?;

    match &cli.command {
        None | Some(Commands::Interactive) => run_interactive(&config),

        Some(Commands::NonFollowers(args)) => {
            run_analyze(Category::NonFollowers, args, cli.format, &config)
        }

        Some(Commands::Fans(args)) => run_analyze(Category::Fans, args, cli.format, &config),

        Some(Commands::Completions { .. }) => Ok(()),
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Api(api_err) => {
            if let Some(hint) = api_hint(api_err) {
                eprintln!();
                eprintln!("Hint: {}", hint);
            }
        }
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Check the --config path or unset FOLLOWDIFF_CONFIG.");
        }
        _ => {}
    }
}
