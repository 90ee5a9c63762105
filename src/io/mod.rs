pub mod document_io;

pub use document_io::{Document, DocumentError, load_document, save_document};
