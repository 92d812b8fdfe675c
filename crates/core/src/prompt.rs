use std::path::Path;

/// Separator placed between prompt sections and after every collected document.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Extension (including the dot) of the files the documentation walk collects.
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Build the final prompt sent to the model.
///
/// The three sections are joined in a fixed order, instructions first, then
/// the starting example, then the aggregated documentation, with exactly one
/// blank line between them. Section contents are not trimmed.
pub fn assemble_prompt(instructions: &str, example: &str, documentation: &str) -> String {
    [instructions, example, documentation].join(SECTION_SEPARATOR)
}

/// Returns true if the file name ends in `.md`.
///
/// Matching is case sensitive: `README.MD` is not collected.
pub fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MARKDOWN_SUFFIX))
}

/// Append one document and its trailing separator to the aggregate.
pub fn append_document(aggregate: &mut String, document: &str) {
    aggregate.push_str(document);
    aggregate.push_str(SECTION_SEPARATOR);
}
