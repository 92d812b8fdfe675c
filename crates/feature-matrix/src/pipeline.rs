use crate::client::{ApiKey, GenerativeModel, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::prelude::*;
use feature_matrix_core::prompt::assemble_prompt;
use std::path::{Path, PathBuf};

#[derive(Debug, clap::Args, Clone)]
pub struct RunOptions {
    /// Documentation tree to collect Markdown files from
    #[arg(long, env = "FEATURE_MATRIX_DOCS_ROOT", default_value = "../../docs")]
    pub docs_root: PathBuf,

    /// Directory that receives the generated index.md
    #[arg(
        long,
        env = "FEATURE_MATRIX_OUTPUT_DIR",
        default_value = "../../docs/features"
    )]
    pub output_dir: PathBuf,

    /// Instruction template placed at the start of the prompt
    #[arg(long = "prompt", env = "FEATURE_MATRIX_PROMPT", default_value = "prompt.md")]
    pub prompt_path: PathBuf,

    /// Starting example placed after the instructions
    #[arg(long = "start", env = "FEATURE_MATRIX_START", default_value = "start.md")]
    pub start_path: PathBuf,

    /// Gemini model identifier
    #[arg(long, env = "FEATURE_MATRIX_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Written(PathBuf),
    NothingWritten,
}

async fn read_template(path: &Path, what: &str) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| f!("Cannot read {} from {}", what, path.display()))
}

/// Collect, assemble, request, write. Each stage runs once; the first error
/// aborts the run.
///
/// `connect` builds the model from the resolved credential. It is not called
/// when the credential is missing, so no request can be made without one.
pub async fn run<M, F>(options: &RunOptions, connect: F) -> Result<RunOutcome>
where
    M: GenerativeModel,
    F: FnOnce(ApiKey) -> Result<M>,
{
    let api_key = ApiKey::resolve(options.api_key.as_deref())?;
    // Dropped on every exit path below.
    let model = connect(api_key)?;

    log::info!("reading prompt");
    let instructions = read_template(&options.prompt_path, "prompt").await?;

    log::info!("reading starting example");
    let example = read_template(&options.start_path, "starting example").await?;

    log::info!("collecting documentation from {}", options.docs_root.display());
    let documentation = crate::docs::collect_markdown(&options.docs_root)
        .context("Cannot retrieve and process the documentation tree")?;

    let prompt = assemble_prompt(&instructions, &example, &documentation);
    log::debug!("prompt length: {} bytes", prompt.len());

    log::info!("sending the request to {}", options.model);
    let response = model
        .generate_content(&prompt)
        .await
        .context("Did not get a valid response back from the model")?;

    if let Some(usage) = &response.usage_metadata {
        log::debug!(
            "token usage: prompt={:?} candidates={:?} total={:?}",
            usage.prompt_token_count,
            usage.candidates_token_count,
            usage.total_token_count
        );
    }

    match crate::output::write_output(&response, &options.output_dir)? {
        Some(path) => {
            log::info!("wrote output to {}", path.display());
            Ok(RunOutcome::Written(path))
        }
        None => Ok(RunOutcome::NothingWritten),
    }
}
