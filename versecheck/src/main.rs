use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use human_panic::setup_panic;
use strum::IntoEnumIterator;
use tracing::error;
use versecheck::prelude::{
    analyze_root, AnalyzeArgs, ConfigOptions, FoundConfig, Genre, LoggingOpts, Mood, Section,
};

/// Versecheck
///
/// Versecheck submits song lyrics to an analysis service, along with a
/// handful of tuning parameters, and renders the returned critique as an
/// HTML report. The analysis itself happens on the remote endpoint;
/// versecheck owns the exchange and the safe rendering of the result.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,

    #[clap(flatten)]
    config: ConfigOptions,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit lyrics for analysis and render the critique.
    Analyze(AnalyzeArgs),
    /// List the accepted section, mood, and genre values.
    List,
}

#[tokio::main]
async fn main() {
    setup_panic!();
    dotenvy::dotenv().ok();
    let opts = Cli::parse();

    let _guard = opts
        .logging
        .configure_logging(&opts.config.get_run_id(), "root");
    let error_code = run_subcommand(opts).await;

    std::process::exit(error_code);
}

async fn run_subcommand(opts: Cli) -> i32 {
    let found_config = match opts.config.load_config() {
        Err(e) => {
            error!(target: "user", "Failed to load configuration: {}", e);
            return 2;
        }
        Ok(c) => c,
    };

    handle_commands(&found_config, &opts.command)
        .await
        .unwrap_or_else(|e| {
            error!(target: "user", "Critical Error. {}", e);
            1
        })
}

async fn handle_commands(found_config: &FoundConfig, command: &Command) -> Result<i32> {
    match command {
        Command::Analyze(args) => analyze_root(found_config, args).await,
        Command::List => {
            show_domains();
            Ok(0)
        }
    }
}

fn show_domains() {
    print_domain("Sections", Section::iter(), Section::default());
    print_domain("Moods", Mood::iter(), Mood::default());
    print_domain("Genres", Genre::iter(), Genre::default());
}

fn print_domain<T>(heading: &str, values: impl Iterator<Item = T>, default: T)
where
    T: std::fmt::Display + PartialEq,
{
    tracing::info!(target: "user", "{}", heading.white().bold());
    for value in values {
        let marker = if value == default { " (default)" } else { "" };
        tracing::info!(target: "user", "- {}{}", value, marker);
    }
    tracing::info!(target: "user", "");
}
