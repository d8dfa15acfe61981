//! add-title - prefix the page <title> with the site name

use std::process::ExitCode;

use clap::Parser;

use breakaway::cli::{self, CommonArgs};
use breakaway::filter::{DEFAULT_TITLE_PREFIX, TitleConfig, TitleFilter};

#[derive(Parser)]
#[command(name = "add-title")]
#[command(version, about = "Prefix the page title with the site name", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Text inserted before the existing title
    #[arg(long, env = "BREAKAWAY_TITLE_PREFIX", default_value = DEFAULT_TITLE_PREFIX)]
    prefix: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = TitleConfig {
        prefix: cli.prefix.clone(),
    };

    cli::execute(&cli.common, || Ok(TitleFilter::with_config(config)))
}
