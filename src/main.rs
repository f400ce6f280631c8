use anyhow::Result;
use structopt::StructOpt;
use nessus_export::function::config::Config;
use nessus_export::function::export::run_export;
use nessus_export::function::output;

#[tokio::main]
async fn main() {
    // 1. Parse command line arguments (structopt prints usage and exits on bad arity)
    let config = Config::from_args();

    // 2. Run the export; every failure bubbles up here and terminates the run
    if let Err(err) = run(config).await {
        output::error(&format!("{err}"));
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let summary = run_export(config).await?;
    output::info(&format!(
        "Export complete: {} report(s) saved",
        summary.reports.len()
    ));
    Ok(())
}
