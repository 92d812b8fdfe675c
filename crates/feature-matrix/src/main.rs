use crate::prelude::{eprintln, *};
use clap::Parser;

mod client;
mod docs;
mod error;
mod output;
mod pipeline;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Regenerate the feature matrix page from the documentation tree using Gemini"
)]
pub struct App {
    #[clap(flatten)]
    run: pipeline::RunOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "FEATURE_MATRIX_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let app = App::parse();

    if app.global.verbose {
        eprintln!("Docs root: {}", app.run.docs_root.display());
        eprintln!("Output dir: {}", app.run.output_dir.display());
        eprintln!("Prompt: {}", app.run.prompt_path.display());
        eprintln!("Start: {}", app.run.start_path.display());
        eprintln!("Model: {}", app.run.model);
        eprintln!("Base URL: {}", app.run.base_url);
    }

    let connect = |api_key: client::ApiKey| {
        client::GeminiClient::new(api_key, &app.run.base_url, &app.run.model)
    };

    let result = tokio::select! {
        result = pipeline::run(&app.run, connect) => result,
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted.into()),
    };

    match result {
        Ok(pipeline::RunOutcome::Written(_)) => Ok(()),
        Ok(pipeline::RunOutcome::NothingWritten) => {
            log::info!("no output produced");
            Ok(())
        }
        Err(err) => {
            log::error!("{:#}", err);
            Err(err)
        }
    }
}
