use anyhow::{Context, Result};
use chrono::Utc;
use env_logger::{Env, Target};
use log::info;
use std::io::Write;
use swh_repo_archiver::{read_repositories, report_file_name, run_batch, Cli, Report, SwhClient};

fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging();

    let report_path = report_file_name(&cli.report, Utc::now());
    let mut report = Report::create(&report_path)
        .with_context(|| format!("Failed to create report {}", report_path))?;

    let repositories = read_repositories(&cli.repos)
        .with_context(|| format!("Failed to load repositories from {}", cli.repos))?;

    let client = SwhClient::new(cli.origin);
    info!(
        "Checking {} repositories against {}",
        repositories.len(),
        client.origin()
    );
    run_batch(&client, &repositories, &mut report).context("Batch aborted")?;

    Ok(())
}
