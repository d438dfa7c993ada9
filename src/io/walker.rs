//! Document collection for CLI path arguments.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expands CLI arguments into the list of documents to analyze.
///
/// Explicitly named files pass through untouched; directories expand to the
/// files beneath them whose extension matches, sorted so batch order (and
/// therefore matrix row order) is deterministic.
pub struct DocumentWalker {
    extensions: Vec<String>,
}

impl DocumentWalker {
    pub fn new() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string(), "text".to_string()],
        }
    }

    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    pub fn collect(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut documents = Vec::new();
        for input in inputs {
            if input.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(input)
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .map(|entry| entry.into_path())
                    .filter(|path| self.should_process(path))
                    .collect();
                found.sort();
                documents.extend(found);
            } else {
                documents.push(input.clone());
            }
        }
        documents
    }

    fn should_process(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|allowed| allowed == &ext)
            }
            None => false,
        }
    }
}

impl Default for DocumentWalker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn named_files_pass_through_directories_expand() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "B.").unwrap();
        fs::write(dir.path().join("a.txt"), "A.").unwrap();
        fs::write(dir.path().join("skip.pdf"), "binary").unwrap();

        let named = dir.path().join("skip.pdf");
        let inputs = vec![dir.path().to_path_buf(), named.clone()];
        let documents = DocumentWalker::new().collect(&inputs);

        // Directory contents sorted and filtered; the explicit file kept
        // even though its extension is not in the allow-list.
        assert_eq!(
            documents,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt"), named]
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("LETTER.TXT"), "A.").unwrap();

        let documents = DocumentWalker::new().collect(&[dir.path().to_path_buf()]);
        assert_eq!(documents, vec![dir.path().join("LETTER.TXT")]);
    }
}
