//! Core library for feature-matrix
//!
//! This crate implements the **Functional Core** of the feature-matrix tool,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`feature_matrix_core`** (this crate): Wire types and pure transformations, no I/O
//! - **`feature-matrix`**: Filesystem walking, the HTTP client and orchestration (the Imperative Shell)
//!
//! Everything here can be tested with plain fixture data: no temporary
//! directories, no HTTP mocks.
//!
//! # Module Organization
//!
//! - [`gemini`]: Request/response models for the Gemini `generateContent` endpoint
//!   and the first-candidate selection rule
//! - [`prompt`]: Prompt assembly and Markdown file detection
//!
//! # Example Usage
//!
//! ```rust
//! use feature_matrix_core::prompt::assemble_prompt;
//!
//! let prompt = assemble_prompt("Generate a matrix.", "| Feature |", "# Docs");
//! assert_eq!(prompt, "Generate a matrix.\n\n| Feature |\n\n# Docs");
//! ```

pub mod gemini;
pub mod prompt;
