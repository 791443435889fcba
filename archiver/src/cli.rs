use crate::client::SWH_ORIGIN;
use clap::Parser;
use std::ffi::OsString;

/// Software Heritage script to check archived services
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repositories file path location (one `service_type,url` per line), also `-in`
    #[arg(long, default_value = "repositories.txt")]
    pub repos: String,

    /// Report file path location, suffixed with the run's UTC start time, also `-out`
    #[arg(long, default_value = "results.txt")]
    pub report: String,

    /// Software Heritage API origin
    #[arg(long, default_value = SWH_ORIGIN)]
    pub origin: String,
}

impl Cli {
    /// Parse arguments, accepting the single-dash `-in`/`-out` spellings.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite `-in`/`-out` (and `-in=x`/`-out=x`) to `--repos`/`--report`.
///
/// Clap short flags are one character, so these would otherwise be read as
/// `-i n` and `-o ut`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str().and_then(rewrite_arg) {
                Some(rewritten) => OsString::from(rewritten),
                None => arg,
            }
        })
        .collect()
}

fn rewrite_arg(arg: &str) -> Option<String> {
    match arg.split_once('=') {
        Some(("-in", value)) => Some(format!("--repos={}", value)),
        Some(("-out", value)) => Some(format!("--report={}", value)),
        Some(_) => None,
        None => match arg {
            "-in" => Some("--repos".to_string()),
            "-out" => Some("--report".to_string()),
            _ => None,
        },
    }
}
