pub mod dataset;
pub mod error;
pub mod file;
pub mod http;
pub mod source;

pub use dataset::parse_code_tree;
pub use error::{Result, SyncError};
pub use file::FileSource;
pub use http::{fetch_dataset, FetchOptions, HttpSource};
pub use source::DatasetSource;
