//! add-header - insert the shared header.html into <head>

use std::process::ExitCode;

use clap::Parser;

use breakaway::cli::{self, CommonArgs};
use breakaway::dom::InsertPosition;
use breakaway::filter::{HeaderConfig, HeaderFilter};

#[derive(Parser)]
#[command(name = "add-header")]
#[command(version, about = "Insert the shared header fragment into <head>", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Where the header goes among the existing <head> children
    #[arg(long, value_enum, default_value = "prepend")]
    position: InsertPosition,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = HeaderConfig {
        position: cli.position,
    };

    cli::execute(&cli.common, || {
        Ok(HeaderFilter::load(&cli.common.loader()?)?.with_config(config))
    })
}
