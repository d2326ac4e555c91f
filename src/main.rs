use anyhow::Context;
use clap::Parser;
use colored::*;
use github_stargazers::cli::Cli;
use github_stargazers::{ClientConfig, StargazerEnumerator};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.client_config().context("Invalid configuration")?;

    if let Err(e) = run(&cli, &config).await {
        fail(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli, config: &ClientConfig) -> anyhow::Result<()> {
    let enumerator = StargazerEnumerator::from_config(&cli.repository, config)?;

    if let Some(user) = &cli.user {
        if enumerator.is_stargazer(user).await? {
            succeed("Stargazer");
        } else {
            fail("Not a Stargazer");
        }
        return Ok(());
    }

    let stargazers = enumerator.list_all_stargazers().await?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stargazers)?);
        return Ok(());
    }

    if stargazers.is_empty() {
        println!("0 stargazers.");
        return Ok(());
    }

    println!("Stargazers:");
    for stargazer in &stargazers {
        println!("{}", stargazer.name);
    }

    Ok(())
}

fn succeed(message: &str) {
    println!("{} {}", "✔".green(), message);
}

fn fail(message: &str) {
    println!("{} {}", "✖".red(), message);
}
