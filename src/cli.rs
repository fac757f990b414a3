// src/cli.rs
// =============================================================================
// Command-line interface, parsed with clap's derive API.
//
//   getmembers bevry browserstate --concurrency 5 --json
//
// Defaults match QueryOptions::default(), so leaving a flag out behaves the
// same as calling the library with default options.
// =============================================================================

use clap::Parser;

use getmembers::QueryOptions;

#[derive(Parser, Debug)]
#[command(
    name = "getmembers",
    version,
    about = "Fetch the public members of GitHub organizations, deduplicated",
    long_about = "getmembers lists the public members of one or more GitHub organizations, \
                  resolves each member's profile, and prints one entry per person even when \
                  they belong to several of the organizations. Credentials are read from \
                  GITHUB_ACCESS_TOKEN / GITHUB_TOKEN or GITHUB_CLIENT_ID + GITHUB_CLIENT_SECRET."
)]
pub struct Cli {
    /// Organizations to fetch members from (e.g. bevry browserstate)
    #[arg(required = true)]
    pub orgs: Vec<String>,

    /// First page of the member listing to fetch
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Members per page (GitHub allows at most 100)
    #[arg(long, default_value_t = 100)]
    pub size: u32,

    /// Last page to fetch; 0 fetches until a short page
    #[arg(long, default_value_t = 10)]
    pub pages: u32,

    /// Maximum concurrent requests per fan-out; 0 means unlimited
    #[arg(long, default_value_t = 0)]
    pub concurrency: usize,

    /// Personal access token, overrides the environment
    #[arg(long, env = "GETMEMBERS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output fellows as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log every page and profile request
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            page: self.page,
            size: self.size,
            pages: self.pages,
            concurrency: self.concurrency,
        }
    }
}
