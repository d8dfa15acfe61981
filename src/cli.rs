//! Plumbing shared by the filter binaries.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

use crate::assets::DirectoryLoader;
use crate::error::Result;
use crate::filter::{self, Filter};

/// Arguments every filter binary accepts.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// HTML file to read (standard input when absent or `-`)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory holding header.html and navigation.html
    /// (default: the directory of this executable)
    #[arg(long, value_name = "DIR", env = "BREAKAWAY_ASSETS_DIR")]
    pub assets: Option<PathBuf>,

    /// Log to standard error: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Read the whole input document.
    pub fn read_input(&self) -> Result<Vec<u8>> {
        match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                tracing::debug!(path = %path.display(), "reading input file");
                Ok(std::fs::read(path)?)
            }
            _ => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }

    /// Loader for the configured (or default) asset directory.
    pub fn loader(&self) -> Result<DirectoryLoader> {
        match &self.assets {
            Some(dir) => Ok(DirectoryLoader::new(dir)),
            None => DirectoryLoader::beside_executable(),
        }
    }
}

/// Install a stderr subscriber with the level picked by `-v` count.
///
/// `RUST_LOG` directives, when set, refine the default level.
pub fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

/// Run one filter binary to completion.
///
/// The page is written to standard output only when every step succeeded;
/// otherwise the error goes to standard error and the exit code is non-zero.
pub fn execute<F, B>(common: &CommonArgs, build: B) -> ExitCode
where
    F: Filter,
    B: FnOnce() -> Result<F>,
{
    setup_logging(common.verbose);

    match process(common, build) {
        Ok(html) => match write_output(&html) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn process<F: Filter>(common: &CommonArgs, build: impl FnOnce() -> Result<F>) -> Result<String> {
    let filter = build()?;
    let input = common.read_input()?;
    filter::run(&filter, &input)
}

fn write_output(html: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_common_args_parse() {
        let cli = TestCli::try_parse_from(["filter", "-vv", "--assets", "/srv/assets", "page.html"]).unwrap();

        assert_eq!(cli.common.verbose, 2);
        assert_eq!(cli.common.input, Some(PathBuf::from("page.html")));
        assert_eq!(cli.common.loader().unwrap().root(), std::path::Path::new("/srv/assets"));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>hi</p>").unwrap();

        let cli = TestCli::try_parse_from([std::ffi::OsStr::new("filter"), path.as_os_str()]).unwrap();
        assert_eq!(cli.common.read_input().unwrap(), b"<p>hi</p>");
    }

    #[test]
    fn test_missing_input_file_is_io_error() {
        let cli = TestCli::try_parse_from(["filter", "/nonexistent/breakaway/page.html"]).unwrap();
        assert!(matches!(cli.common.read_input(), Err(crate::Error::Io(_))));
    }
}
