use std::path::{Path, PathBuf};

use eyre::Result;

/// Header placed at the top of every emitted source file.
///
/// Plain line comments only, so that emitted files can be pulled in with
/// `include!`.
pub const GENERATED_HEADER: &str =
    "// Generated by metagen from the schema. Do not edit by hand; regenerate instead.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file body (without header)
    fn render(&self) -> String;

    /// Render the complete file content, header included
    fn contents(&self) -> String {
        let body = self.render();
        match self.rules().header {
            Some(header) if body.is_empty() => format!("{}\n", header),
            Some(header) => format!("{}\n\n{}", header, body),
            None => body,
        }
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_file(&self.path(base), &self.contents())
    }
}

/// Write `content` to `path`, creating parent directories.
///
/// Files whose content is already identical are left untouched so that
/// regeneration does not disturb modification times.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Ok(existing) = std::fs::read_to_string(path)
        && existing == content
    {
        tracing::debug!(path = %path.display(), "unchanged");
        return Ok(WriteResult::Unchanged);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "written");
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for emitted source files: carry the generated header.
    pub fn generated() -> Self {
        Self {
            header: Some(GENERATED_HEADER),
        }
    }

    /// Override the header line.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::generated()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Notes(&'static str);

    impl GeneratedFile for Notes {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("notes.rs")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        let result = write_file(&path, "nested").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        assert_eq!(write_file(&path, "same").unwrap(), WriteResult::Written);
        assert_eq!(write_file(&path, "same").unwrap(), WriteResult::Unchanged);
        assert_eq!(write_file(&path, "other").unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "other");
    }

    #[test]
    fn test_generated_file_prepends_header() {
        let temp = TempDir::new().unwrap();
        let file = Notes("pub struct Foo;\n");

        file.write(temp.path()).unwrap();

        let written = fs::read_to_string(temp.path().join("nested/notes.rs")).unwrap();
        assert!(written.starts_with(GENERATED_HEADER));
        assert!(written.ends_with("pub struct Foo;\n"));
    }

    #[test]
    fn test_header_on_empty_body() {
        assert_eq!(Notes("").contents(), format!("{}\n", GENERATED_HEADER));
    }
}
