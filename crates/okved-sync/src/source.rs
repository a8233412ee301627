use crate::Result;
use okved_core::CodeTree;

pub trait DatasetSource {
    fn source_name(&self) -> &'static str;
    fn fetch_tree(&self) -> Result<CodeTree>;
}
