//! Collaborators shared by every tool handler.
//!
//! Built once at server start and passed to each invocation.

use std::sync::Arc;

use crate::storage::{
    FileReader, FileVerifier, FileWriter, InMemoryFileStore, OsFileReader, OsFileVerifier,
    OsFileWriter,
};

#[derive(Clone)]
pub struct ToolContext {
    pub reader: Arc<dyn FileReader>,
    pub writer: Arc<dyn FileWriter>,
    pub verifier: Arc<dyn FileVerifier>,
}

impl ToolContext {
    pub fn new(
        reader: Arc<dyn FileReader>,
        writer: Arc<dyn FileWriter>,
        verifier: Arc<dyn FileVerifier>,
    ) -> Self {
        Self {
            reader,
            writer,
            verifier,
        }
    }

    /// Local file system collaborators.
    pub fn os() -> Self {
        Self::new(
            Arc::new(OsFileReader::new()),
            Arc::new(OsFileWriter::new()),
            Arc::new(OsFileVerifier::new()),
        )
    }

    /// All collaborators backed by one shared in-memory store.
    pub fn in_memory(store: &InMemoryFileStore) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )
    }
}
