use crate::prelude::*;
use feature_matrix_core::gemini::{first_candidate_text, GenerateContentResponse};
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE_NAME: &str = "index.md";

/// Write the text of the first candidate to `output_dir/index.md`.
///
/// Returns `Ok(None)` without touching the filesystem when the response has
/// no candidate or the first candidate carries no text. Existing files are
/// overwritten in place.
pub fn write_output(
    response: &GenerateContentResponse,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    let Some(text) = first_candidate_text(response) else {
        match response.empty_reason() {
            Some(reason) => log::info!("model returned no text ({}), nothing written", reason),
            None => log::info!("model returned no text, nothing written"),
        }
        return Ok(None);
    };

    fs::create_dir_all(output_dir).with_context(|| {
        f!(
            "Failed to create output directory {}",
            output_dir.display()
        )
    })?;

    let path = output_dir.join(OUTPUT_FILE_NAME);
    fs::write(&path, text).with_context(|| f!("Failed to write {}", path.display()))?;

    Ok(Some(path))
}
