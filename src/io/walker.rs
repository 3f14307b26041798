use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Recursive stub-file discovery under a root path, filtered by extension.
pub struct FileWalker {
    root: PathBuf,
    extension: String,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "api".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension.as_str())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_walk_finds_only_matching_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("service.api"), "class Service:\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a stub\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/builder.api"), "class Builder:\n").unwrap();

        let mut found = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        found.sort();

        let names: Vec<_> = found
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["builder.api", "service.api"]);
    }

    #[test]
    fn test_walk_with_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("service.stub"), "class Service:\n").unwrap();
        fs::write(dir.path().join("service.api"), "class Service:\n").unwrap();

        let found = FileWalker::new(dir.path().to_path_buf())
            .with_extension("stub")
            .walk()
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
