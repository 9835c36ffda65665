use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use gitwrapped::models::WrappedSummary;
use gitwrapped::render::{format_markdown, format_text};
use gitwrapped::server::{self, AppState};
use gitwrapped::{Config, ContributionClient, GitHubClient, StatsDeriver, WrappedPipeline};

#[derive(Parser, Debug)]
#[command(name = "gitwrapped")]
#[command(version = "0.1.0")]
#[command(about = "Year-in-review summaries for GitHub accounts")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve summaries over HTTP
    Serve {
        /// Address to listen on (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Build one summary and print it
    Show {
        /// GitHub username to summarize
        username: String,

        /// Output format (json, text, markdown)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// GitHub token for this request (overrides GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,

        /// Summarize this year instead of the one resolved from today's date
        #[arg(long)]
        year: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitwrapped=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let pipeline = WrappedPipeline::new(
        GitHubClient::from_config(&config)?,
        ContributionClient::from_config(&config)?,
        StatsDeriver::new(config.activity_offset()?),
    );

    match args.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or(config.bind_addr);
            server::serve(addr, AppState::new(pipeline)).await?;
        }
        Command::Show {
            username,
            format,
            output,
            token,
            year,
        } => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            spinner.set_message(format!("Fetching GitHub data for {}", username));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = match year {
                Some(year) => {
                    pipeline
                        .wrapped_for_year(&username, token.as_deref(), year)
                        .await
                }
                None => pipeline.wrapped(&username, token.as_deref()).await,
            };
            spinner.finish_and_clear();

            output_summary(&result?, &format, output.as_deref())?;
        }
    }

    Ok(())
}

fn output_summary(
    summary: &WrappedSummary,
    format: &str,
    path: Option<&str>,
) -> anyhow::Result<()> {
    let output = match format {
        "json" => serde_json::to_string_pretty(summary)?,
        "markdown" => format_markdown(summary),
        _ => format_text(summary),
    };

    if let Some(path) = path {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}
