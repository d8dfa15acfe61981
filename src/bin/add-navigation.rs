//! add-navigation - prepend navigation.html to <body>, marking the current page

use std::process::ExitCode;

use clap::Parser;

use breakaway::cli::{self, CommonArgs};
use breakaway::filter::{NavigationFilter, NavigationFilterConfig};
use breakaway::navigation::{MatchMode, NavigationConfig, NavigationPolicy};

#[derive(Parser)]
#[command(name = "add-navigation")]
#[command(version, about = "Prepend the site navigation to <body>", long_about = None)]
#[command(after_help = "EXAMPLES:
    BREAKAWAY_SOURCE_PATH=blog/index.html add-navigation < page.html
    add-navigation --source-path /about.html --policy unwrap about.html")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Path of the page being rendered; without it nothing is marked
    #[arg(long, value_name = "PATH", env = "BREAKAWAY_SOURCE_PATH")]
    source_path: Option<String>,

    /// What happens to the entry for the current page
    #[arg(long, value_enum, default_value = "select")]
    policy: NavigationPolicy,

    /// Mark every matching entry or only the first
    #[arg(long, value_enum, default_value = "all")]
    match_mode: MatchMode,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = NavigationFilterConfig {
        source_path: cli.source_path.clone(),
        annotation: NavigationConfig {
            policy: cli.policy,
            match_mode: cli.match_mode,
        },
    };

    cli::execute(&cli.common, || {
        NavigationFilter::load(&cli.common.loader()?, config)
    })
}
