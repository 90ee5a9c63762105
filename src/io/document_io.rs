use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::content::Content;

/// Error type for document I/O operations
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("no such file: {0}")]
    NotFound(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A task list bound to a file on disk.
///
/// The content's full line store is what gets persisted; the visibility
/// view only affects what an editor shows, never what is saved.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    path: PathBuf,
    pub content: Content,
}

impl Document {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persistence view: every line, hidden ones included.
    pub fn print(&self) -> String {
        self.content.print_all()
    }

    /// Rebind this document to new content, same file.
    pub fn change_content(&self, content: Content) -> Document {
        Document {
            name: self.name.clone(),
            path: self.path.clone(),
            content,
        }
    }
}

/// Read a task list file into a document with every line visible.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| DocumentError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Document {
        name,
        path: path.to_path_buf(),
        content: Content::from_text(&text),
    })
}

/// Write the document's full line store back to its file.
pub fn save_document(document: &Document) -> Result<(), DocumentError> {
    atomic_write(&document.path, document.print().as_bytes()).map_err(|source| {
        DocumentError::WriteError {
            path: document.path.clone(),
            source,
        }
    })
}

/// Write to a temp file in the target directory, then rename into place.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
