//! obscure-emails - hide addresses in mailto: links from naive scrapers

use std::process::ExitCode;

use clap::Parser;

use breakaway::cli::{self, CommonArgs};
use breakaway::filter::{DEFAULT_SUBJECT, EmailConfig, EmailEncoding, EmailFilter};

#[derive(Parser)]
#[command(name = "obscure-emails")]
#[command(version, about = "Obscure mailto: links", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// How the address inside the href is encoded
    #[arg(long, value_enum, default_value = "percent")]
    encoding: EmailEncoding,

    /// Subject appended to each link (empty for none)
    #[arg(long, default_value = DEFAULT_SUBJECT)]
    subject: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = EmailConfig {
        encoding: cli.encoding,
        subject: Some(cli.subject.clone()).filter(|s| !s.is_empty()),
    };

    cli::execute(&cli.common, || Ok(EmailFilter::with_config(config)))
}
