use relative_path::{RelativePath, RelativePathBuf};

/// A note in the vault: its path relative to the notes root, and the
/// title other notes use to reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    relative_path: RelativePathBuf,
    title: String,
}

impl Note {
    /// Create a new Note from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let title = Self::extract_title(&relative_path);
        Self {
            relative_path,
            title,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the title (file name without the .md extension)
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Extract the title from a relative path (strips .md extension)
    fn extract_title(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for Note {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Note {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_extension() {
        let note = Note::from_relative_str("Link target.md");
        assert_eq!(note.title(), "Link target");
    }

    #[test]
    fn title_ignores_directories() {
        let note = Note::from_relative_str("projects/2026/Roadmap.md");
        assert_eq!(note.title(), "Roadmap");
        assert_eq!(note.relative_path().as_str(), "projects/2026/Roadmap.md");
    }

    #[test]
    fn non_markdown_name_is_kept_verbatim() {
        let note = Note::from_relative_str("notes/README");
        assert_eq!(note.title(), "README");
    }
}
