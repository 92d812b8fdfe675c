use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing API key: set GEMINI_API_KEY or pass --api-key")]
    MissingApiKey,

    #[error("Gemini API returned status {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Failed to traverse {}: {source}", .root.display())]
    Traversal {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Interrupted before the run completed")]
    Interrupted,
}
