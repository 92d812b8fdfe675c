use crate::prelude::*;
use feature_matrix_core::prompt::{append_document, is_markdown_file};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

/// Concatenate every Markdown file below `root`, in traversal order.
///
/// Each collected file is followed by a blank line. Files that cannot be
/// read are skipped with a warning and contribute nothing. Traversal errors
/// (missing root, unreadable directory) abort the collection.
pub fn collect_markdown(root: &Path) -> Result<String> {
    let walker = WalkBuilder::new(root)
        // Plain recursive walk: no .gitignore handling, hidden files included.
        .standard_filters(false)
        .build();

    let mut aggregate = String::new();
    let mut collected = 0usize;

    for entry in walker {
        let entry = entry.map_err(|source| Error::Traversal {
            root: root.to_path_buf(),
            source,
        })?;

        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if is_dir || !is_markdown_file(entry.path()) {
            continue;
        }

        match fs::read(entry.path()) {
            Ok(bytes) => {
                append_document(&mut aggregate, &String::from_utf8_lossy(&bytes));
                collected += 1;
            }
            Err(err) => {
                log::warn!("skipping {}: {}", entry.path().display(), err);
            }
        }
    }

    log::debug!(
        "collected {} markdown files ({} bytes) from {}",
        collected,
        aggregate.len(),
        root.display()
    );

    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_only_non_markdown_files_yields_empty_string() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "notes.txt", "text");
        write(temp_dir.path(), "nested/config.yaml", "a: 1");
        write(temp_dir.path(), "nested/page.mdx", "# mdx");

        assert_eq!(collect_markdown(temp_dir.path()).unwrap(), "");
    }

    #[test]
    fn test_empty_directory_yields_empty_string() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(collect_markdown(temp_dir.path()).unwrap(), "");
    }

    #[test]
    fn test_single_file_followed_by_separator() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "index.md", "# Index");

        assert_eq!(collect_markdown(temp_dir.path()).unwrap(), "# Index\n\n");
    }

    #[test]
    fn test_every_markdown_file_collected_recursively() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "<A>");
        write(temp_dir.path(), "sub/b.md", "<B>");
        write(temp_dir.path(), "sub/deeper/c.md", "<C>");
        write(temp_dir.path(), ".hidden/d.md", "<D>");
        write(temp_dir.path(), "sub/skip.txt", "<X>");

        let output = collect_markdown(temp_dir.path()).unwrap();

        // Order follows the filesystem, so only membership is asserted.
        for marker in ["<A>", "<B>", "<C>", "<D>"] {
            assert!(output.contains(&format!("{}\n\n", marker)), "{marker}");
        }
        assert!(!output.contains("<X>"));
        assert_eq!(output.matches("\n\n").count(), 4);
        assert_eq!(output.len(), 4 * ("<A>".len() + 2));
    }

    #[test]
    fn test_root_may_be_a_single_file() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "solo.md", "solo");

        let output = collect_markdown(&temp_dir.path().join("solo.md")).unwrap();
        assert_eq!(output, "solo\n\n");
    }

    #[test]
    fn test_missing_root_is_a_traversal_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = collect_markdown(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Traversal { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.md", "alpha");
        write(temp_dir.path(), "sub/b.md", "beta");
        let expected = collect_markdown(temp_dir.path()).unwrap();

        // A dangling link named like a Markdown file fails to read even as root.
        symlink(
            temp_dir.path().join("missing-target"),
            temp_dir.path().join("sub/broken.md"),
        )
        .unwrap();

        let output = collect_markdown(temp_dir.path()).unwrap();
        assert_eq!(output.len(), expected.len());
        assert_eq!(output.matches("\n\n").count(), 2);
        assert!(output.contains("alpha\n\n"));
        assert!(output.contains("beta\n\n"));
    }
}
