// src/main.rs
// =============================================================================
// Entry point of the getmembers CLI.
//
// What happens here:
// 1. Load .env, set up logging, parse arguments
// 2. Fetch the members of every organization given on the command line
// 3. Print the fellows as a table or as JSON
// 4. Exit with 0 on success, 2 on any error
//
// The whole fetch runs on a single-threaded runtime: concurrency comes from
// interleaving network waits, not from threads.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use getmembers::{logging, Config, Credentials, Fellow, Fellows, Getter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // clap prints usage and exits on bad arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env().context("failed to read GitHub configuration")?;

    // --token (or GETMEMBERS_TOKEN) beats whatever GITHUB_* provided
    if let Some(token) = cli.token.clone() {
        config = config.with_credentials(Credentials::Token(token));
    }

    let getter = Getter::new(config).context("failed to create HTTP client")?;

    // No per-call credentials: the transport falls back to the config's
    let fellows = getter
        .fetch_members_from_orgs(cli.orgs.as_slice(), cli.query_options(), None)
        .await
        .with_context(|| format!("failed to fetch members of {}", cli.orgs.join(", ")))?;

    print_fellows(&fellows, cli.json)
}

fn print_fellows(fellows: &Fellows, json: bool) -> Result<()> {
    if json {
        // A plain array is easier to pipe into jq than an object keyed by id
        let list: Vec<&Fellow> = fellows.iter().collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        print_table(fellows);
    }
    Ok(())
}

fn print_table(fellows: &Fellows) {
    println!("{:<25} {:<30} {:<25} {:<25}", "USERNAME", "NAME", "COMPANY", "LOCATION");
    println!("{}", "=".repeat(105));

    // Sort by what the user sees, not by internal id
    let mut rows: Vec<&Fellow> = fellows.iter().collect();
    rows.sort_by_key(|f| f.display_name().to_lowercase());

    for fellow in rows {
        println!(
            "{:<25} {:<30} {:<25} {:<25}",
            truncate(fellow.display_name(), 24),
            truncate(fellow.name.as_deref().unwrap_or(""), 29),
            truncate(fellow.company.as_deref().unwrap_or(""), 24),
            truncate(fellow.location.as_deref().unwrap_or(""), 24),
        );
    }

    println!();
    println!("📊 Fellows: {}", fellows.len());
}

// Cuts on a char boundary so multi-byte names don't panic
fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let cut: String = value.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_value() {
        assert_eq!(truncate("octocat", 24), "octocat");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ÅÅÅÅÅÅÅÅÅÅ", 6), "ÅÅÅ...");
    }
}
