use crate::dataset::parse_code_tree;
use crate::source::DatasetSource;
use crate::Result;
use okved_core::CodeTree;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_tree(&self) -> Result<CodeTree> {
        let body = fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), bytes = body.len(), "dataset file read");
        parse_code_tree(&body)
    }
}
