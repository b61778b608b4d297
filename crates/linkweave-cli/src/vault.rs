use crate::note::Note;
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("Note not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("Path is not inside the notes directory: {0}")]
    OutsideVault(PathBuf),
}

/// Scan the notes directory for markdown notes, sorted by path.
pub fn scan_notes(notes_root: &Path) -> Result<Vec<Note>, VaultError> {
    if !notes_root.exists() {
        return Err(VaultError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let rel = path
                .strip_prefix(notes_root)
                .map_err(|_| VaultError::OutsideVault(path.clone()))?;
            let rel = RelativePathBuf::from_path(rel)
                .map_err(|_| VaultError::OutsideVault(path.clone()))?;
            Ok(Note::new(rel))
        })
        .collect()
}

/// Read a note's body
pub fn read_note(note: &Note, notes_root: &Path) -> Result<String, VaultError> {
    let absolute_path = note.relative_path().to_path(notes_root);
    if !absolute_path.exists() {
        return Err(VaultError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(VaultError::Io)
}

/// Write a note's body back to the vault
pub fn write_note(note: &Note, notes_root: &Path, content: &str) -> Result<(), VaultError> {
    let absolute_path = note.relative_path().to_path(notes_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(VaultError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(VaultError::Io)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), VaultError> {
    let entries = fs::read_dir(dir).map_err(VaultError::Io)?;

    for entry in entries {
        let entry = entry.map_err(VaultError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}
