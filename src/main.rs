use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use bulkclone::{
    cli::{self, OutputFormat},
    dispatcher::Dispatcher,
    executor::GitExecutor,
    input, report,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = cli::run()?;
    let references = input::load_references(&config.run.input)?;
    log::info!("{} repositories to clone", references.len());

    if !config.run.dry_run {
        std::fs::create_dir_all(&config.run.destination).with_context(|| {
            format!(
                "could not create destination `{:?}`",
                &config.run.destination
            )
        })?;
    }

    let executor = Arc::new(GitExecutor::new().with_depth(config.run.depth));
    let dispatcher = Dispatcher::new(config.run, executor)?.with_progress(config.progress);
    let results = dispatcher.run(references).await;

    match config.output {
        OutputFormat::Text => print!("{}", report::render(&results)),
        OutputFormat::Json => println!("{}", report::render_json(&results)?),
    }

    if results.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
